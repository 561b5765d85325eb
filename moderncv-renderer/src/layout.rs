//! Per-template layout choices.
//!
//! Each [`TemplateKind`](crate::TemplateKind) owns one static [`LayoutSpec`]:
//! header direction, picture shape, where contact details go, how skills are
//! listed, and the utility classes for every text role. The class strings
//! are consumed by the external styling system and are not interpreted here.

use serde::Serialize;

/// Flow of the header block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Stacked and centred.
    Centered,
    /// Picture, identity and contact side by side.
    Row,
    /// Stacked and left-aligned.
    Column,
}

/// How the profile picture is framed, if shown at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PictureSpec {
    pub size_px: u32,
    pub class_name: &'static str,
}

/// Where contact details appear and which of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactPlacement {
    /// One line under the title: phone • email • location. No website.
    Inline,
    /// Right-aligned column beside the name: one line per field, website included.
    Aside,
    /// Two lines under the title: `email / phone / location`, then website.
    Stacked,
}

/// Presentation of the skills list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillPresentation {
    /// Filled rounded badges.
    Pills,
    /// Bordered inline badges.
    Outlined,
    /// Plain inline words.
    Plain,
}

/// Utility classes per text role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleClasses {
    pub container: &'static str,
    pub header: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub contact: &'static str,
    pub section_title: &'static str,
    pub item_title: &'static str,
    pub item_subtitle: &'static str,
    pub item_description: &'static str,
    pub skills_container: &'static str,
    pub skill_item: &'static str,
}

/// Everything that distinguishes one template from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutSpec {
    pub direction: Direction,
    pub picture: Option<PictureSpec>,
    pub contact: ContactPlacement,
    pub skills: SkillPresentation,
    pub classes: StyleClasses,
}

pub(crate) const MODERN: LayoutSpec = LayoutSpec {
    direction: Direction::Centered,
    picture: Some(PictureSpec {
        size_px: 128,
        class_name: "w-32 h-32 rounded-full object-cover mx-auto mb-4 border-4 border-purple-200 dark:border-purple-800",
    }),
    contact: ContactPlacement::Inline,
    skills: SkillPresentation::Pills,
    classes: StyleClasses {
        container: "font-sans text-gray-800 dark:text-gray-200",
        header: "text-center mb-8",
        name: "text-4xl font-bold text-purple-600 dark:text-purple-400",
        title: "text-xl text-gray-600 dark:text-gray-400 mt-1",
        contact: "flex justify-center flex-wrap gap-x-4 gap-y-1 mt-4 text-sm",
        section_title: "text-2xl font-bold text-purple-600 dark:text-purple-400 border-b-2 border-purple-500 pb-1 mb-4",
        item_title: "text-lg font-semibold",
        item_subtitle: "text-sm text-gray-500 dark:text-gray-400",
        item_description: "text-gray-700 dark:text-gray-300 mt-1",
        skills_container: "flex flex-wrap gap-2 mt-2",
        skill_item: "bg-purple-100 dark:bg-purple-900/50 text-purple-800 dark:text-purple-300 text-sm font-medium px-3 py-1 rounded-full",
    },
};

pub(crate) const CLASSIC: LayoutSpec = LayoutSpec {
    direction: Direction::Row,
    picture: Some(PictureSpec {
        size_px: 96,
        class_name: "w-24 h-24 rounded-md object-cover",
    }),
    contact: ContactPlacement::Aside,
    skills: SkillPresentation::Outlined,
    classes: StyleClasses {
        container: "font-serif text-gray-900 dark:text-gray-100",
        header: "mb-6 pb-2 border-b-2 border-gray-400 dark:border-gray-600 flex items-center gap-6",
        name: "text-3xl font-bold tracking-wider",
        title: "text-lg text-gray-700 dark:text-gray-300",
        contact: "text-right text-sm ml-auto",
        section_title: "text-xl font-bold uppercase tracking-widest mb-3 mt-6",
        item_title: "text-md font-bold",
        item_subtitle: "text-sm italic text-gray-600 dark:text-gray-400",
        item_description: "text-gray-800 dark:text-gray-200 mt-1 text-sm",
        skills_container: "mt-2",
        skill_item: "inline-block mr-2 mb-1 border border-gray-400 dark:border-gray-600 px-2 py-0.5 text-sm rounded",
    },
};

pub(crate) const MINIMALIST: LayoutSpec = LayoutSpec {
    direction: Direction::Column,
    picture: None,
    contact: ContactPlacement::Stacked,
    skills: SkillPresentation::Plain,
    classes: StyleClasses {
        container: "font-sans text-gray-700 dark:text-gray-300",
        header: "mb-8",
        name: "text-5xl font-thin tracking-widest uppercase",
        title: "text-md text-gray-500 dark:text-gray-400 mt-1 tracking-wider",
        contact: "text-xs mt-4 space-y-1",
        section_title: "text-sm font-bold uppercase tracking-widest border-b border-gray-300 dark:border-gray-700 pb-2 mb-4 mt-8",
        item_title: "text-md font-medium",
        item_subtitle: "text-xs text-gray-400 dark:text-gray-500",
        item_description: "text-sm mt-1",
        skills_container: "flex flex-wrap gap-x-4 gap-y-1 mt-2",
        skill_item: "text-sm",
    },
};
