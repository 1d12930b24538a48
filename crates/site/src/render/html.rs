//! HTML pages for the web front end.

use std::fmt::Write as _;

use vfs::{Line, Segment, Transcript, VPath};

use super::Prompt;
use crate::router::Response;

const STYLE: &str = "\
body{margin:0;background:#0c0c0c;color:#d4d4d4;font-family:ui-monospace,monospace}\
main{padding:1rem}\
pre{margin:0 0 1rem;white-space:pre-wrap}\
a{color:#60a5fa;text-decoration:underline}\
.identity{color:#4ade80}\
#terminal{min-height:50vh}";

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn anchor(href: &str, label: &str) -> String {
    format!(
        r#"<a href="{}">{}</a>"#,
        escape_html(href),
        escape_html(label)
    )
}

/// `user@host:/path $`, with the path linking back to its listing.
pub fn prompt(prompt: &Prompt, cwd: &VPath) -> String {
    let cwd = cwd.to_string();
    format!(
        r#"<span class="identity">{}</span>:{} $"#,
        escape_html(&prompt.identity()),
        anchor(&cwd, &cwd)
    )
}

fn line(line: &Line, identity: &Prompt) -> String {
    let mut out = String::new();
    for segment in line.segments() {
        match segment {
            Segment::Text { text } => out.push_str(&escape_html(text)),
            Segment::Prompt { path } => out.push_str(&prompt(identity, path)),
            Segment::Link { label, href } => out.push_str(&anchor(href, label)),
        }
    }
    out
}

/// A transcript as a single `<pre>` block.
pub fn transcript(transcript: &Transcript, identity: &Prompt) -> String {
    let body = transcript
        .lines()
        .iter()
        .map(|l| line(l, identity))
        .collect::<Vec<_>>()
        .join("\n");
    format!("<pre>{body}</pre>")
}

fn body(response: &Response, identity: &Prompt) -> String {
    match response {
        Response::Page(t) | Response::NotFound(t) => transcript(t, identity),
        Response::Terminal { cwd, header } => format!(
            r#"{}<div id="terminal" data-cwd="{}"></div>"#,
            transcript(header, identity),
            escape_html(&cwd.to_string())
        ),
        Response::Redirect(target) => {
            format!("<p>Redirecting to {}</p>", anchor(target, target))
        }
        Response::Download { path } => {
            let name = path.name().unwrap_or_default();
            format!("<p>Download {}</p>", anchor(&path.to_string(), name))
        }
    }
}

/// A complete HTML document for `response`.
pub fn page(response: &Response, identity: &Prompt) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1, viewport-fit=cover\">\n\
         <title>{}$</title>\n\
         <style>{}</style>\n\
         </head>\n\
         <body>\n\
         <main>{}</main>\n\
         </body>\n\
         </html>\n",
        escape_html(&identity.host),
        STYLE,
        body(response, identity)
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Router;
    use pretty_assertions::assert_eq;

    fn identity() -> Prompt {
        Prompt::new("www", "example.org")
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_prompt_links_cwd() {
        assert_eq!(
            prompt(&identity(), &VPath::new(["links"])),
            r#"<span class="identity">www@example.org</span>:<a href="/links">/links</a> $"#
        );
    }

    #[test]
    fn test_transcript_escapes_text() {
        let t = Transcript::new()
            .line(Line::text("<b>"))
            .line(Line::new().push_link("a&b", "/a?b=1&c=2"));
        assert_eq!(
            transcript(&t, &identity()),
            "<pre>&lt;b&gt;\n<a href=\"/a?b=1&amp;c=2\">a&amp;b</a></pre>"
        );
    }

    #[test]
    fn test_not_found_page() {
        let router = Router::default();
        let response = router.route(&VPath::new(["nope"]));
        let html = page(&response, &identity());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>example.org$</title>"));
        assert!(html.contains("file nope"));
        assert!(html.contains("nope: cannot open `nope&#39; (No such file or directory)"));
    }

    #[test]
    fn test_listing_page_links_entries() {
        let router = Router::default();
        let response = router.route(&VPath::new(["links"]));
        let html = page(&response, &identity());

        assert!(html.contains(r#"<a href="/links/.">./</a>"#));
        assert!(html.contains(r#"<a href="/links/..">../</a>"#));
        assert!(html.contains(r#"<a href="mailto:joaquin@joaquinrossi.net">email -&gt; mailto:joaquin@joaquinrossi.net</a>"#));
    }

    #[test]
    fn test_terminal_mount_point() {
        let router = Router::default();
        let response = router.route(&VPath::new(["terminal"]));
        let html = page(&response, &identity());

        assert!(html.contains(r#"<div id="terminal" data-cwd="/terminal"></div>"#));
        assert!(html.contains(" cd terminal"));
    }

    #[test]
    fn test_redirect_and_download_bodies() {
        let html = page(&Response::Redirect("/dev/null".to_string()), &identity());
        assert!(html.contains(r#"Redirecting to <a href="/dev/null">/dev/null</a>"#));

        let html = page(
            &Response::Download {
                path: VPath::new(["key.asc"]),
            },
            &identity(),
        );
        assert!(html.contains(r#"<a href="/key.asc">key.asc</a>"#));
    }
}
