//! Terminal rendering for `termfolio render`.

use crossterm::style::Stylize;
use vfs::{Segment, Transcript, VPath};

use super::Prompt;

fn prompt(identity: &Prompt, cwd: &VPath, color: bool) -> String {
    let who = identity.identity();
    let cwd = cwd.to_string();
    if color {
        format!("{}:{} $", who.green(), cwd.blue().underlined())
    } else {
        format!("{who}:{cwd} $")
    }
}

/// Render `transcript` as text lines.
///
/// Links print their label only; with `color` they are underlined in blue
/// like the prompt path.
pub fn render(transcript: &Transcript, identity: &Prompt, color: bool) -> String {
    let mut out = String::new();
    for line in transcript.lines() {
        for segment in line.segments() {
            match segment {
                Segment::Text { text } => out.push_str(text),
                Segment::Prompt { path } => out.push_str(&prompt(identity, path, color)),
                Segment::Link { label, .. } if color => {
                    out.push_str(&label.as_str().blue().underlined().to_string())
                }
                Segment::Link { label, .. } => out.push_str(label),
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vfs::Line;

    #[test]
    fn test_plain_render() {
        let transcript = Transcript::new()
            .line(Line::command(VPath::new(["links"]), "cat email"))
            .line(Line::text("x ").push_link("email", "mailto:a@b"));

        assert_eq!(
            render(&transcript, &Prompt::new("www", "host"), false),
            "www@host:/links $ cat email\nx email\n"
        );
    }

    #[test]
    fn test_color_render_keeps_text() {
        let transcript = Transcript::new().line(Line::command(VPath::root(), "ls -al"));
        let out = render(&transcript, &Prompt::new("www", "host"), true);

        assert!(out.contains("\u{1b}["));
        assert!(out.contains("www@host"));
        assert!(out.ends_with(" $ ls -al\n"));
    }

    #[test]
    fn test_empty_transcript() {
        assert_eq!(render(&Transcript::new(), &Prompt::default(), false), "");
    }
}
