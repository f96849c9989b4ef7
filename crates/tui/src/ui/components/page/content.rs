//! Copy and line builders for each section of the page.
//!
//! Every builder returns owned [`Line`]s so the layout can cache them between
//! frames and measure their wrapped height once per change.

use std::ops::Range;

use hbt_types::SectionId;
use ratatui::{
    style::Modifier,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{
    contact::ContactField,
    ui::{
        components::contact::{ContactFormState, SubmissionStatus},
        theme::{Theme, theme_helpers as th},
    },
};

/// Something on the page that reacts to a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    ExploreServices,
    Field(ContactField),
    Submit,
}

/// Inputs the builders need besides the static copy.
pub struct PageContext<'a> {
    pub theme: &'a dyn Theme,
    /// Text width inside the page margins.
    pub width: u16,
    pub viewport_height: u16,
    pub contact: &'a ContactFormState,
    pub cta_focused: bool,
    pub year: i32,
}

/// Lines of one section plus the line ranges that are click targets.
#[derive(Debug, Default, Clone)]
pub struct SectionContent {
    pub lines: Vec<Line<'static>>,
    pub targets: Vec<(Range<usize>, PageTarget)>,
}

impl SectionContent {
    fn push(&mut self, line: impl Into<Line<'static>>) {
        self.lines.push(line.into());
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn target_from(&mut self, start: usize, target: PageTarget) {
        self.targets.push((start..self.lines.len(), target));
    }
}

const BANNER: [&str; 6] = [
    "██╗  ██╗██████╗ ████████╗",
    "██║  ██║██╔══██╗╚══██╔══╝",
    "███████║██████╔╝   ██║   ",
    "██╔══██║██╔══██╗   ██║   ",
    "██║  ██║██████╔╝   ██║   ",
    "╚═╝  ╚═╝╚═════╝    ╚═╝   ",
];

const TAGLINE: &str = "Audio Engineer • Producer • Rapper";
const HERO_BLURB: &str = "Crafting sonic masterpieces and delivering impactful narratives.";
const CTA_LABEL: &str = "  Explore Services  ";

/// Body copy fragments; `true` marks a highlighted name.
const ABOUT: [&[(&str, bool)]; 3] = [
    &[
        ("Inspired by the meticulous sonic sculpting of ", false),
        ("Mike Bozzi", true),
        (", the innovative production of ", false),
        ("Nick Mira", true),
        (", the creative genius of ", false),
        ("Cheese Goldberg", true),
        (", and the impactful mixing of ", false),
        ("Cameran Cartee", true),
        (", HBT brings a unique blend of technical precision and artistic vision to every project.", false),
    ],
    &[
        ("Drawing further influence from the mastering mastery of ", false),
        ("Alex Tumay", true),
        (", the groundbreaking mixes of ", false),
        ("Mixedbyali", true),
        (", and the raw energy of ", false),
        ("BBG Baby Joe", true),
        (
            ", HBT is dedicated to pushing boundaries in audio engineering, crafting beats that resonate, and delivering compelling lyrical performances.",
            false,
        ),
    ],
    &[(
        "Whether it's mixing, mastering, beat-making, or vocal recording, HBT is committed to transforming your artistic vision into a polished, powerful auditory experience.",
        false,
    )],
];

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    offerings: [&'static str; 4],
}

const SERVICES: [Service; 3] = [
    Service {
        icon: "◉",
        title: "Audio Engineering",
        description: "Professional mixing and mastering services to ensure your tracks sound crisp, clear, and impactful across all platforms. From vocal tuning to dynamic processing, I bring your sound to life.",
        offerings: ["Mixing & Mastering", "Vocal Processing", "Sound Design", "Audio Restoration"],
    },
    Service {
        icon: "⚙",
        title: "Music Production",
        description: "From concept to completion, I produce custom beats and full instrumental tracks tailored to your unique style and vision. Genre-spanning production with a focus on innovation.",
        offerings: [
            "Custom Beat Production",
            "Instrumental Composition",
            "Arrangement & Structuring",
            "Session Recording",
        ],
    },
    Service {
        icon: "ϟ",
        title: "Rapping & Songwriting",
        description: "Lyrical prowess and captivating delivery for your tracks. Offering ghostwriting, feature verses, and full song collaborations to elevate your project's narrative and impact.",
        offerings: ["Feature Verses", "Ghostwriting", "Song Structure & Hooks", "Vocal Performance Coaching"],
    },
];

const PORTFOLIO: [(&str, &str); 3] = [
    (
        "\"Urban Pulse\" - Mixing & Mastering",
        "A high-energy hip-hop track, mixed and mastered to perfection, showcasing dynamic range and clarity.",
    ),
    (
        "\"Midnight Groove\" - Beat Production",
        "An atmospheric R&B instrumental featuring lush synths and a smooth, driving rhythm.",
    ),
    (
        "\"Rhyme & Reason\" - Feature Verse",
        "A powerful guest verse delivered on a collaborative track, showcasing lyrical depth and flow.",
    ),
];

const CONTACT_INTRO: &str = "Ready to elevate your sound? Fill out the form below or reach out directly.";
const INPUT_MAX_WIDTH: usize = 64;
const CARET: &str = "▌";

/// Builds the lines for `section`.
pub fn build_section(section: SectionId, ctx: &PageContext<'_>) -> SectionContent {
    match section {
        SectionId::Home => hero(ctx),
        SectionId::About => about(ctx),
        SectionId::Services => services(ctx),
        SectionId::Portfolio => portfolio(ctx),
        SectionId::Contact => contact(ctx),
    }
}

/// Footer shown below the last section.
pub fn footer(ctx: &PageContext<'_>) -> Vec<Line<'static>> {
    let muted = ctx.theme.text_muted_style();
    vec![
        Line::default(),
        Line::styled(format!("© {} HBT. All rights reserved.", ctx.year), muted).centered(),
        Line::styled("Inspired by the masters of sound.", muted.add_modifier(Modifier::ITALIC)).centered(),
        Line::default(),
    ]
}

fn heading(content: &mut SectionContent, theme: &dyn Theme, title: &'static str) {
    content.blank();
    content.push(Line::styled(title, theme.accent_emphasis_style()).centered());
    content.blank();
}

fn hero(ctx: &PageContext<'_>) -> SectionContent {
    let theme = ctx.theme;
    let mut body = SectionContent::default();

    if usize::from(ctx.width) >= BANNER[0].width() {
        for row in BANNER {
            body.push(Line::styled(row, theme.accent_emphasis_style()).centered());
        }
    } else {
        body.push(Line::styled("HBT", theme.accent_emphasis_style()).centered());
    }
    body.blank();
    body.push(Line::styled(TAGLINE, theme.accent_secondary_style().add_modifier(Modifier::BOLD)).centered());
    body.blank();
    body.push(Line::styled(HERO_BLURB, theme.text_secondary_style()).centered());
    body.blank();
    let start = body.lines.len();
    body.push(Line::styled(CTA_LABEL, th::button_primary_style(theme, ctx.cta_focused)).centered());
    body.target_from(start, PageTarget::ExploreServices);

    // Copy is vertically centred; the layout pads the rest of the viewport.
    let rows = super::layout::wrapped_rows(&body.lines, ctx.width);
    let spare = u32::from(ctx.viewport_height).saturating_sub(rows);
    let top_padding = (spare / 2) as usize;

    let mut content = SectionContent::default();
    content.lines.extend(std::iter::repeat_n(Line::default(), top_padding));
    content.lines.append(&mut body.lines);
    content.targets = body
        .targets
        .into_iter()
        .map(|(range, target)| (range.start + top_padding..range.end + top_padding, target))
        .collect();
    content
}

fn about(ctx: &PageContext<'_>) -> SectionContent {
    let theme = ctx.theme;
    let mut content = SectionContent::default();
    heading(&mut content, theme, "About HBT");

    let plain = theme.text_secondary_style();
    let highlight = theme.accent_secondary_style().add_modifier(Modifier::BOLD);
    for paragraph in ABOUT {
        let spans: Vec<Span<'static>> = paragraph
            .iter()
            .map(|(text, is_name)| Span::styled(*text, if *is_name { highlight } else { plain }))
            .collect();
        content.push(Line::from(spans));
        content.blank();
    }
    content
}

fn services(ctx: &PageContext<'_>) -> SectionContent {
    let theme = ctx.theme;
    let mut content = SectionContent::default();
    heading(&mut content, theme, "My Services");

    for service in &SERVICES {
        content.push(Line::from(vec![
            Span::styled(format!("{}  ", service.icon), theme.accent_primary_style()),
            Span::styled(service.title, theme.text_primary_style().add_modifier(Modifier::BOLD)),
        ]));
        content.push(Line::styled(service.description, theme.text_secondary_style()));
        for offering in service.offerings {
            content.push(Line::from(vec![
                Span::styled("  • ", theme.accent_primary_style()),
                Span::styled(offering, theme.text_muted_style()),
            ]));
        }
        content.blank();
    }
    content
}

fn portfolio(ctx: &PageContext<'_>) -> SectionContent {
    let theme = ctx.theme;
    let mut content = SectionContent::default();
    heading(&mut content, theme, "My Work");

    for (title, description) in PORTFOLIO {
        content.push(Line::styled(title, theme.text_primary_style().add_modifier(Modifier::BOLD)));
        content.push(Line::styled(description, theme.text_secondary_style()));
        content.push(Line::styled("Listen Now ♫", theme.accent_primary_style()));
        content.blank();
    }
    content
}

fn contact(ctx: &PageContext<'_>) -> SectionContent {
    let theme = ctx.theme;
    let form = ctx.contact;
    let mut content = SectionContent::default();
    heading(&mut content, theme, "Get In Touch");
    content.push(Line::styled(CONTACT_INTRO, theme.text_secondary_style()).centered());
    content.blank();

    let input_width = usize::from(ctx.width).clamp(1, INPUT_MAX_WIDTH);
    for field in ContactField::ALL {
        let input = form.input(field);
        let focused = input.focus.get();
        let start = content.lines.len();

        let label_style = if focused {
            theme.accent_emphasis_style()
        } else {
            theme.text_secondary_style().add_modifier(Modifier::BOLD)
        };
        content.push(Line::styled(field.label(), label_style));

        let style = th::input_style(theme, input.error.is_none(), focused);
        if input.value.is_empty() && !focused {
            content.push(Line::from(Span::styled(pad(field.placeholder(), input_width), style.patch(theme.text_muted_style()))));
        } else {
            let mut rows = wrap_value(&input.value, input_width.saturating_sub(1).max(1));
            if focused && let Some(last) = rows.last_mut() {
                last.push_str(CARET);
            }
            for row in rows {
                content.push(Line::from(Span::styled(pad(&row, input_width), style)));
            }
        }
        content.target_from(start, PageTarget::Field(field));

        if let Some(error) = input.error {
            content.push(Line::styled(format!("! {error}"), theme.status_error()));
        }
        content.blank();
    }

    let submit_label = if form.is_busy() { "  Sending…  " } else { "  Send Message  " };
    let start = content.lines.len();
    content.push(Line::from(Span::styled(submit_label, th::button_primary_style(theme, form.is_submit_focused()))));
    content.target_from(start, PageTarget::Submit);

    match &form.status {
        Some(SubmissionStatus::Sent) => {
            content.blank();
            content.push(Line::styled("✓ Thanks! Your message is on its way.", theme.status_success()));
        }
        Some(SubmissionStatus::Failed(reason)) => {
            content.blank();
            content.push(Line::styled(format!("✗ Couldn't send your message: {reason}"), theme.status_error()));
        }
        Some(SubmissionStatus::Sending) | None => {}
    }

    content.blank();
    content.push(Line::styled("You can also find me on social media:", theme.text_muted_style()).centered());
    content.push(Line::styled("Instagram  ·  Twitter  ·  YouTube", theme.accent_primary_style()).centered());
    content.blank();
    content
}

/// Pads `text` with spaces to `width` display columns.
fn pad(text: &str, width: usize) -> String {
    let used = text.width();
    let mut padded = String::with_capacity(text.len() + width.saturating_sub(used));
    padded.push_str(text);
    padded.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    padded
}

/// Hard-wraps `value` into rows of at most `width` display columns,
/// honoring embedded newlines.
fn wrap_value(value: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    for source_line in value.split('\n') {
        let mut row = String::new();
        let mut used = 0;
        for character in source_line.chars() {
            let char_width = character.width().unwrap_or(0);
            if used + char_width > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                used = 0;
            }
            row.push(character);
            used += char_width;
        }
        rows.push(row);
    }
    rows
}
