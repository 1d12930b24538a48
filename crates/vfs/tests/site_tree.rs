//! Integration tests for the site tree as served to visitors.
//!
//! These cover the externally visible behaviour:
//! - Root and directory listings
//! - Link entries and redirects
//! - Not-found handling

use pretty_assertions::assert_eq;
use vfs::{not_found, resolve, root, Entry, Rendered, Segment, Transcript, VPath, VfsError};

fn show(path: &str) -> Result<Rendered, VfsError> {
    let path: VPath = path.parse().unwrap();
    resolve(root(), &path)?.show()
}

fn listing(path: &str) -> Transcript {
    match show(path).unwrap() {
        Rendered::Content(transcript) => transcript,
        other => panic!("expected a listing for {path}, got {other:?}"),
    }
}

/// Names shown in a listing, in display order.
fn listed_names(transcript: &Transcript) -> Vec<String> {
    transcript
        .links()
        .map(|(label, _)| label.split(" -> ").next().unwrap().trim_end_matches('/').to_string())
        .collect()
}

// =============================================================================
// Root listing
// =============================================================================

#[test]
fn test_root_listing_starts_with_dot_entries() {
    let transcript = listing("/");
    let names = listed_names(&transcript);

    assert_eq!(names[0], ".");
    assert_eq!(names[1], "..");
    assert_eq!(names.iter().filter(|n| *n == ".").count(), 1);
    assert_eq!(names.iter().filter(|n| *n == "..").count(), 1);
}

#[test]
fn test_root_parent_entry_is_root_itself() {
    let transcript = listing("/");
    let rows: Vec<_> = transcript.lines()[2..4].iter().map(|l| l.plain()).collect();
    let strip_name = |row: &str| row.rsplit_once(' ').unwrap().0.to_string();
    assert_eq!(strip_name(&rows[0]), strip_name(&rows[1]));
}

#[test]
fn test_root_listing_header() {
    let transcript = listing("/");
    assert_eq!(transcript.lines()[0].plain(), "$ ls -al");
    assert_eq!(
        transcript.lines()[0].segments()[0],
        Segment::Prompt {
            path: VPath::root()
        }
    );
    assert_eq!(transcript.lines()[1].plain(), "total 7");
}

#[test]
fn test_root_children_sorted_by_name() {
    let names = listed_names(&listing("/"));
    assert_eq!(
        names[2..].to_vec(),
        vec!["blog", "complaints", "dev", "guestbook", "key.asc", "links", "terminal"]
    );
}

#[test]
fn test_root_entries_match_node_types() {
    let transcript = listing("/");
    let rows: Vec<_> = transcript.lines().iter().map(|l| l.plain()).collect();

    assert!(rows.iter().any(|r| r.starts_with("drw-r--r--") && r.ends_with(" blog/")));
    assert!(rows
        .iter()
        .any(|r| r.starts_with("lrw-r--r--") && r.ends_with(" complaints -> /dev/null")));
    assert!(rows
        .iter()
        .any(|r| r.starts_with("-rw-rw-rw-") && r.ends_with(" guestbook")));
    assert!(rows
        .iter()
        .any(|r| r.starts_with("-rw-r--r--") && r.ends_with(" key.asc")));
    assert!(rows
        .iter()
        .any(|r| r.starts_with("drw-r--r--") && r.ends_with(" terminal/")));
}

// =============================================================================
// Links
// =============================================================================

#[test]
fn test_links_directory_entries() {
    let transcript = listing("/links");
    let entries: Vec<Entry> = transcript
        .links()
        .skip(2)
        .map(|(label, href)| Entry {
            label: label.to_string(),
            href: href.to_string(),
        })
        .collect();

    assert_eq!(
        entries,
        vec![
            Entry {
                label: format!("email -> {}", vfs::tree::EMAIL_HREF),
                href: vfs::tree::EMAIL_HREF.to_string(),
            },
            Entry {
                label: format!("github -> {}", vfs::tree::GITHUB_HREF),
                href: vfs::tree::GITHUB_HREF.to_string(),
            },
        ]
    );
}

#[test]
fn test_external_link_redirects() {
    assert_eq!(
        show("/links/email").unwrap(),
        Rendered::Redirect(vfs::tree::EMAIL_HREF.to_string())
    );
}

#[test]
fn test_complaints_redirects_to_dev_null() {
    assert_eq!(
        show("/complaints").unwrap(),
        Rendered::Redirect("/dev/null".to_string())
    );
}

#[test]
fn test_complaints_traversal_goes_through_target() {
    // /dev/null is a file, so nothing lives below it
    assert!(matches!(
        show("/complaints/anything"),
        Err(VfsError::NotFound { .. })
    ));
}

#[test]
fn test_dev_null_is_empty() {
    assert_eq!(listing("/dev/null").plain(), "$ cat null");
}

// =============================================================================
// Other nodes
// =============================================================================

#[test]
fn test_blog_is_empty_directory() {
    let transcript = listing("/blog");
    assert_eq!(transcript.lines()[1].plain(), "total 0");
    assert_eq!(listed_names(&transcript), vec![".", ".."]);
}

#[test]
fn test_static_file_is_not_rendered() {
    assert_eq!(
        show("/key.asc"),
        Err(VfsError::NotRenderable {
            path: "/key.asc".to_string()
        })
    );
}

#[test]
fn test_terminal_hands_over() {
    let Rendered::Interactive(header) = show("/terminal").unwrap() else {
        panic!("terminal should be interactive");
    };
    assert_eq!(header.plain(), "$ cd terminal");
}

// =============================================================================
// Not found
// =============================================================================

#[test]
fn test_unknown_top_level_segment() {
    let path = VPath::new(["nope"]);
    assert!(matches!(
        resolve(root(), &path),
        Err(VfsError::NotFound { .. })
    ));

    let transcript = not_found(&path);
    assert_eq!(
        transcript.lines()[0].segments()[0],
        Segment::Prompt {
            path: VPath::root()
        }
    );
    assert_eq!(
        transcript.lines()[1].plain(),
        "nope: cannot open `nope' (No such file or directory)"
    );
}

#[test]
fn test_cannot_descend_into_files() {
    assert!(matches!(
        show("/guestbook/page"),
        Err(VfsError::NotFound { .. })
    ));
    assert!(matches!(
        show("/links/github/repos"),
        Err(VfsError::NotFound { .. })
    ));
}
