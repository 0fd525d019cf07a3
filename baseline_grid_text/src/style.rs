// Copyright 2025 the Baseline Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named text styles and content size categories.

/// A named text style, as used by Dynamic Type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TextStyle {
    /// Large title.
    LargeTitle,
    /// First level title.
    Title1,
    /// Second level title.
    Title2,
    /// Third level title.
    Title3,
    /// Headline.
    Headline,
    /// Subheadline.
    Subheadline,
    /// Body text.
    #[default]
    Body,
    /// Callout.
    Callout,
    /// Footnote.
    Footnote,
    /// Primary caption.
    Caption1,
    /// Alternate caption.
    Caption2,
}

impl TextStyle {
    /// Every style, in cycling order.
    pub const ALL: [Self; 11] = [
        Self::LargeTitle,
        Self::Title1,
        Self::Title2,
        Self::Title3,
        Self::Headline,
        Self::Subheadline,
        Self::Body,
        Self::Callout,
        Self::Footnote,
        Self::Caption1,
        Self::Caption2,
    ];

    /// Position of this style in [`Self::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The next style in [`Self::ALL`], wrapping around after the last one.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// A stable identifier for display.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::LargeTitle => "LargeTitle",
            Self::Title1 => "Title1",
            Self::Title2 => "Title2",
            Self::Title3 => "Title3",
            Self::Headline => "Headline",
            Self::Subheadline => "Subheadline",
            Self::Body => "Body",
            Self::Callout => "Callout",
            Self::Footnote => "Footnote",
            Self::Caption1 => "Caption1",
            Self::Caption2 => "Caption2",
        }
    }
}

/// The user's preferred font-size level.
///
/// The first seven levels are the standard sizes, the last five are the
/// accessibility sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContentSizeCategory {
    /// `xSmall`.
    ExtraSmall,
    /// `Small`.
    Small,
    /// `Medium`.
    Medium,
    /// `Large`, the system default.
    #[default]
    Large,
    /// `xLarge`.
    ExtraLarge,
    /// `xxLarge`.
    ExtraExtraLarge,
    /// `xxxLarge`.
    ExtraExtraExtraLarge,
    /// `AX1`.
    AccessibilityMedium,
    /// `AX2`.
    AccessibilityLarge,
    /// `AX3`.
    AccessibilityExtraLarge,
    /// `AX4`.
    AccessibilityExtraExtraLarge,
    /// `AX5`.
    AccessibilityExtraExtraExtraLarge,
}

impl ContentSizeCategory {
    /// Every category, from smallest to largest.
    pub const ALL: [Self; 12] = [
        Self::ExtraSmall,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::ExtraLarge,
        Self::ExtraExtraLarge,
        Self::ExtraExtraExtraLarge,
        Self::AccessibilityMedium,
        Self::AccessibilityLarge,
        Self::AccessibilityExtraLarge,
        Self::AccessibilityExtraExtraLarge,
        Self::AccessibilityExtraExtraExtraLarge,
    ];

    /// Position of this category in [`Self::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The next category in [`Self::ALL`], wrapping around after the largest one.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Returns `true` for the five accessibility sizes.
    #[must_use]
    pub fn is_accessibility(self) -> bool {
        self >= Self::AccessibilityMedium
    }

    /// A stable identifier for display.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ExtraSmall => "ExtraSmall",
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::ExtraLarge => "ExtraLarge",
            Self::ExtraExtraLarge => "ExtraExtraLarge",
            Self::ExtraExtraExtraLarge => "ExtraExtraExtraLarge",
            Self::AccessibilityMedium => "AccessibilityMedium",
            Self::AccessibilityLarge => "AccessibilityLarge",
            Self::AccessibilityExtraLarge => "AccessibilityExtraLarge",
            Self::AccessibilityExtraExtraLarge => "AccessibilityExtraExtraLarge",
            Self::AccessibilityExtraExtraExtraLarge => "AccessibilityExtraExtraExtraLarge",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_declaration_order() {
        for (i, style) in TextStyle::ALL.iter().enumerate() {
            assert_eq!(style.index(), i);
        }
        for (i, category) in ContentSizeCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn next_wraps_around() {
        assert_eq!(TextStyle::Body.next(), TextStyle::Callout);
        assert_eq!(TextStyle::Caption2.next(), TextStyle::LargeTitle);
        assert_eq!(
            ContentSizeCategory::AccessibilityExtraExtraExtraLarge.next(),
            ContentSizeCategory::ExtraSmall
        );
    }

    #[test]
    fn accessibility_sizes_are_the_last_five() {
        let count = ContentSizeCategory::ALL
            .iter()
            .filter(|c| c.is_accessibility())
            .count();
        assert_eq!(count, 5);
        assert!(!ContentSizeCategory::ExtraExtraExtraLarge.is_accessibility());
        assert!(ContentSizeCategory::AccessibilityMedium.is_accessibility());
    }
}
