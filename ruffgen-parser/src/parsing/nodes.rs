//! Content node kinds
//!
//! The parser only cares about a handful of element kinds among the children of the
//! content container:
//!
//! | HTML element | ContentNode | Role                                        |
//! |--------------|-------------|---------------------------------------------|
//! | `h1`-`h6`    | Heading     | opens a section or a setting, by level      |
//! | `p`          | Paragraph   | documentation, or the "Default value:" line |
//! | `ul`         | List        | documentation bullet points                 |
//! | `div`        | Block       | code samples and deprecation notices        |
//! | anything     | Other       | ignored                                     |

/// One direct child of the content container.
///
/// `code` fields hold the text of the nearest `<code>` element at or after the node, in
/// document order: the setting name for a heading, the value for a "Default value:" line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentNode {
    Heading {
        level: u8,
        text: String,
        code: Option<String>,
    },
    Paragraph {
        text: String,
        code: Option<String>,
    },
    List {
        items: Vec<String>,
    },
    Block {
        text: String,
        classes: Vec<String>,
    },
    Other,
}

impl ContentNode {
    pub fn heading(level: u8, text: impl Into<String>, code: Option<&str>) -> Self {
        ContentNode::Heading {
            level,
            text: text.into(),
            code: code.map(str::to_string),
        }
    }

    pub fn paragraph(text: impl Into<String>, code: Option<&str>) -> Self {
        ContentNode::Paragraph {
            text: text.into(),
            code: code.map(str::to_string),
        }
    }

    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ContentNode::List {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn block(text: impl Into<String>, classes: &[&str]) -> Self {
        ContentNode::Block {
            text: text.into(),
            classes: classes.iter().map(|class| class.to_string()).collect(),
        }
    }
}
