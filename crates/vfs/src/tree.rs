//! The fixed site tree.
//!
//! Names and link targets here are the public URL surface of the site;
//! renaming anything breaks bookmarks.

use chrono::Utc;
use once_cell::sync::Lazy;

use crate::metadata::Metadata;
use crate::node::Node;
use crate::path::VPath;
use crate::perms::{Permissions, Triad};

pub const EMAIL_HREF: &str = "mailto:joaquin@joaquinrossi.net";
pub const GITHUB_HREF: &str = "https://github.com/joaquin-rossi";

const GUESTBOOK: &str = "No entries yet.\n";

static ROOT: Lazy<Node> = Lazy::new(|| build_root(&Metadata::placeholder(Utc::now())));

/// The process-wide tree with placeholder metadata, built on first use.
pub fn root() -> &'static Node {
    &ROOT
}

/// Build the site tree, giving every node `defaults` as metadata.
pub fn build_root(defaults: &Metadata) -> Node {
    let meta = || defaults.clone();
    let writable = defaults.with_perms(Permissions {
        user: Triad::new(true, true, false),
        group: Triad::new(true, true, false),
        other: Triad::new(true, true, false),
        ..Permissions::default()
    });

    Node::directory(
        meta(),
        [
            ("blog", Node::directory(meta(), Vec::<(String, Node)>::new())),
            (
                "complaints",
                Node::path_link(meta(), VPath::new(["dev", "null"])),
            ),
            (
                "dev",
                Node::directory(meta(), [("null", Node::text(meta(), ""))]),
            ),
            ("guestbook", Node::text(writable, GUESTBOOK)),
            ("key.asc", Node::static_file(meta())),
            (
                "links",
                Node::directory(
                    meta(),
                    [
                        ("email", Node::web_link(meta(), EMAIL_HREF)),
                        ("github", Node::web_link(meta(), GITHUB_HREF)),
                    ],
                ),
            ),
            ("terminal", Node::terminal(meta())),
        ],
    )
}
