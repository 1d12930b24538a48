//! Directory nodes and their `ls -al` rendering.

use indexmap::IndexMap;

use super::{command_for, Node};
use crate::listing::{compare_names, left_pad_list};
use crate::path::VPath;
use crate::transcript::{Line, Transcript};

/// Children keyed by name, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    children: IndexMap<String, Node>,
}

/// One rendered listing row before column alignment.
struct Row {
    mode: String,
    links: String,
    user: String,
    group: String,
    size: String,
    date: String,
    label: String,
    href: String,
}

impl Directory {
    /// Build from `(name, node)` pairs. A repeated name replaces the earlier
    /// node but keeps its position.
    pub fn new<I, S>(children: I) -> Self
    where
        I: IntoIterator<Item = (S, Node)>,
        S: Into<String>,
    {
        Self {
            children: children
                .into_iter()
                .map(|(name, node)| (name.into(), node))
                .collect(),
        }
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    /// Children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Children sorted by name for display.
    pub fn sorted_children(&self) -> Vec<(&str, &Node)> {
        let mut sorted: Vec<_> = self.children().collect();
        sorted.sort_by(|(a, _), (b, _)| compare_names(a, b));
        sorted
    }

    /// Render `ls -al` for this directory.
    ///
    /// `this` is the node owning the directory (shown as `.`) and `parent`
    /// the node shown as `..`.
    pub(crate) fn listing(&self, this: &Node, path: &VPath, parent: &Node) -> Transcript {
        let mut entries = vec![(".", this), ("..", parent)];
        entries.extend(self.sorted_children());

        let rows: Vec<Row> = entries
            .into_iter()
            .map(|(name, node)| {
                let entry = node.show_entry(&path.join(name));
                let meta = node.metadata();
                Row {
                    mode: meta.mode_string(node.file_type()),
                    links: meta.links.to_string(),
                    user: meta.user.clone(),
                    group: meta.group.clone(),
                    size: meta.size.to_string(),
                    date: meta.date_string(),
                    label: entry.label,
                    href: entry.href,
                }
            })
            .collect();

        let links = left_pad_list(&rows.iter().map(|r| r.links.as_str()).collect::<Vec<_>>());
        let users = left_pad_list(&rows.iter().map(|r| r.user.as_str()).collect::<Vec<_>>());
        let groups = left_pad_list(&rows.iter().map(|r| r.group.as_str()).collect::<Vec<_>>());
        let sizes = left_pad_list(&rows.iter().map(|r| r.size.as_str()).collect::<Vec<_>>());
        let dates = left_pad_list(&rows.iter().map(|r| r.date.as_str()).collect::<Vec<_>>());

        let mut transcript = Transcript::new()
            .line(Line::command(path.parent(), command_for("ls -al", path)))
            .line(Line::text(format!("total {}", self.len())));

        for (i, row) in rows.into_iter().enumerate() {
            transcript = transcript.line(
                Line::text(format!(
                    "{} {} {} {} {} {} ",
                    row.mode, links[i], users[i], groups[i], sizes[i], dates[i]
                ))
                .push_link(row.label, row.href),
            );
        }
        transcript
    }
}
