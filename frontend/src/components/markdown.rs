use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MarkdownProps {
    pub content: AttrValue,
}

/// Renders static markdown documents such as the About page.
#[function_component(Markdown)]
pub fn markdown(props: &MarkdownProps) -> Html {
    let rendered = use_memo(props.content.clone(), |content| render(content));
    (*rendered).clone()
}

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Heading anchors in document order as `(level, id, text)`.
pub fn outline(markdown: &str) -> Vec<(u8, String, String)> {
    let mut outline = Vec::new();
    let mut current: Option<(u8, String)> = None;

    for event in Parser::new_ext(markdown, options()) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = Some((heading_rank(level), String::new()));
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((rank, text)) = current.take() {
                    outline.push((rank, slug(&text), text));
                }
            }
            _ => {}
        }
    }
    outline
}

fn heading_rank(level: HeadingLevel) -> u8 {
    level as u8
}

/// Lowercased, hyphen-joined anchor id. Non-ASCII letters are kept.
fn slug(text: &str) -> String {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

struct Frame<'a> {
    tag: Option<Tag<'a>>,
    children: Vec<Html>,
    text: String,
}

impl<'a> Frame<'a> {
    fn new(tag: Option<Tag<'a>>) -> Self {
        Self {
            tag,
            children: Vec::new(),
            text: String::new(),
        }
    }
}

fn render(markdown: &str) -> Html {
    let mut stack = vec![Frame::new(None)];

    for event in Parser::new_ext(markdown, options()) {
        match event {
            Event::Start(tag) => stack.push(Frame::new(Some(tag))),
            Event::End(_) => {
                if stack.len() < 2 {
                    continue;
                }
                if let Some(frame) = stack.pop() {
                    let text = frame.text.clone();
                    let node = close(frame);
                    if let Some(parent) = stack.last_mut() {
                        parent.text.push_str(&text);
                        parent.children.push(node);
                    }
                }
            }
            event => {
                if let Some(frame) = stack.last_mut() {
                    leaf(frame, event);
                }
            }
        }
    }

    let children = stack.into_iter().flat_map(|frame| frame.children);
    html! { <div class="markdown">{ for children }</div> }
}

fn leaf(frame: &mut Frame<'_>, event: Event<'_>) {
    match event {
        Event::Text(text) => {
            frame.text.push_str(&text);
            frame.children.push(html! { {text.to_string()} });
        }
        Event::Code(code) => {
            frame.text.push_str(&code);
            frame.children.push(html! { <code>{code.to_string()}</code> });
        }
        Event::SoftBreak => frame.children.push(html! { " " }),
        Event::HardBreak => frame.children.push(html! { <br/> }),
        Event::Rule => frame.children.push(html! { <hr/> }),
        Event::TaskListMarker(checked) => frame
            .children
            .push(html! { <input type="checkbox" checked={checked} disabled=true /> }),
        // Raw HTML is dropped
        _ => {}
    }
}

fn close(frame: Frame<'_>) -> Html {
    let Frame {
        tag,
        children,
        text,
    } = frame;
    let content = html! { { for children } };

    let Some(tag) = tag else {
        return content;
    };

    match tag {
        Tag::Paragraph => html! { <p>{content}</p> },
        Tag::Heading { level, .. } => {
            let name = format!("h{}", heading_rank(level));
            html! { <@{name} id={slug(&text)}>{content}</@> }
        }
        Tag::BlockQuote(_) => html! { <blockquote>{content}</blockquote> },
        Tag::CodeBlock(kind) => {
            let lang = match kind {
                CodeBlockKind::Fenced(lang) if !lang.is_empty() => {
                    Some(format!("language-{}", lang))
                }
                _ => None,
            };
            html! { <pre><code class={lang}>{content}</code></pre> }
        }
        Tag::List(Some(start)) => html! { <ol start={start.to_string()}>{content}</ol> },
        Tag::List(None) => html! { <ul>{content}</ul> },
        Tag::Item => html! { <li>{content}</li> },
        Tag::Table(_) => html! { <table>{content}</table> },
        Tag::TableHead => html! { <thead><tr>{content}</tr></thead> },
        Tag::TableRow => html! { <tr>{content}</tr> },
        Tag::TableCell => html! { <td>{content}</td> },
        Tag::Emphasis => html! { <em>{content}</em> },
        Tag::Strong => html! { <strong>{content}</strong> },
        Tag::Strikethrough => html! { <del>{content}</del> },
        Tag::Link {
            dest_url, title, ..
        } => {
            let external = dest_url.starts_with("http://") || dest_url.starts_with("https://");
            html! {
                <a href={dest_url.to_string()}
                    title={title.to_string()}
                    target={external.then_some("_blank")}
                    rel={external.then_some("noopener noreferrer")}
                >{content}</a>
            }
        }
        Tag::Image {
            dest_url, title, ..
        } => html! { <img src={dest_url.to_string()} title={title.to_string()} alt={text} /> },
        _ => content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug() {
        assert_eq!(slug("Getting Started"), "getting-started");
        assert_eq!(slug("  v0.1: notes!"), "v0-1-notes");
        assert_eq!(slug("使い方"), "使い方");
    }

    #[test]
    fn test_outline_collects_headings() {
        let doc = "# Ringua\n\nintro\n\n## Getting `started`\n\ntext\n\n### FAQ\n";
        let outline = outline(doc);
        assert_eq!(
            outline,
            vec![
                (1, "ringua".to_string(), "Ringua".to_string()),
                (2, "getting-started".to_string(), "Getting started".to_string()),
                (3, "faq".to_string(), "FAQ".to_string()),
            ]
        );
    }

    #[test]
    fn test_outline_ignores_body_text() {
        assert!(outline("just a paragraph\n\n- and a list").is_empty());
    }
}
