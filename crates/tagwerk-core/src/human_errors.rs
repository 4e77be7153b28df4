// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for volunteers printing price tags.
//
// Every technical error is mapped to plain English with a clear suggestion.
// The severity drives how the CLI presents it.

use crate::error::TagwerkError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Disk hiccup — trying again may work.
    Transient,
    /// User must fix their input (bad character, zero count, no consigner).
    ActionRequired,
    /// Cannot be fixed by the user — internal problem.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown first).
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    /// Whether running the same command again could succeed.
    pub retriable: bool,
    pub severity: Severity,
}

impl Severity {
    /// Prefix shown before the message.
    pub fn label(self) -> &'static str {
        match self {
            Self::Transient => "temporary error",
            Self::ActionRequired => "error",
            Self::Permanent => "internal error",
        }
    }
}

impl std::fmt::Display for HumanError {
    /// `<severity>: <message>` then the suggestion on its own line.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}\n{}",
            self.severity.label(),
            self.message,
            self.suggestion
        )
    }
}

/// Convert a `TagwerkError` into a `HumanError` anyone at the sale table can act on.
pub fn humanize_error(err: &TagwerkError) -> HumanError {
    match err {
        // -- Barcode errors --
        TagwerkError::EmptyInput => HumanError {
            message: "There is nothing to put in the barcode.".into(),
            suggestion: "Enter at least one letter or digit.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        TagwerkError::InvalidCharacter { ch, position } => HumanError {
            message: format!(
                "The character {ch:?} (position {}) can't go in a barcode.",
                position + 1
            ),
            suggestion: "Use only digits, capital letters, spaces, and the symbols - . $ / + %"
                .into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        TagwerkError::UnknownSymbol(_) => HumanError {
            message: "The barcode encoder hit an internal problem.".into(),
            suggestion: "Please report this, including the text you tried to encode.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        TagwerkError::InvalidGeometryRequest(detail) => HumanError {
            message: "The barcode size doesn't make sense.".into(),
            suggestion: format!("Width and height must be greater than zero. ({detail})"),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        TagwerkError::InvalidColor(color) => HumanError {
            message: format!("The colour {color:?} isn't recognised."),
            suggestion: "Write colours as hex codes, like #000 or #1a2b3c.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        // -- Label sheet errors --
        TagwerkError::UnknownTemplate(id) => HumanError {
            message: format!("We don't know the label sheet {id:?}."),
            suggestion: "Run `tagwerk templates` to see the sheets we support.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        TagwerkError::InvalidTagGroup(detail) => HumanError {
            message: "One of the tag prices or counts isn't valid.".into(),
            suggestion: format!(
                "Write each group as PRICE:COUNT with both numbers above zero, like 2:10. ({detail})"
            ),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        TagwerkError::MissingConsigner => HumanError {
            message: "No consigner ID is set.".into(),
            suggestion: "Pass --consigner, or save one with `tagwerk config set-consigner <ID>`."
                .into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        TagwerkError::PdfError(detail) => HumanError {
            message: "We couldn't build the label PDF.".into(),
            suggestion: format!("Try again. If this keeps happening, please report it. ({detail})"),
            retriable: true,
            severity: Severity::Transient,
        },

        // -- Storage --
        TagwerkError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "We don't have permission to write that file.".into(),
                    suggestion: "Choose a different output location and try again.".into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else if io_err.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: "A file or folder couldn't be found.".into(),
                    suggestion: "Check the output path exists, then try again.".into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem reading or writing a file.".into(),
                    suggestion: "Try again. If this keeps happening, your disk may be full."
                        .into(),
                    retriable: true,
                    severity: Severity::Transient,
                }
            }
        }

        TagwerkError::Serialization(_) => HumanError {
            message: "The saved settings couldn't be read.".into(),
            suggestion: "Set your consigner ID again to rewrite the settings file.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },
    }
}
