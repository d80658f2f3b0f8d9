use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Title and paragraph text scraped from an article page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Page {
    pub title: Option<String>,
    pub paragraphs: Vec<String>,
}

pub fn parse_page(markup: &str) -> Page {
    let dom = parse_document(RcDom::default(), Default::default()).one(markup);

    let mut blocks = Vec::new();
    collect_elements(&dom.document, "p", &mut blocks);

    Page {
        title: first_element(&dom.document, "h1")
            .and_then(|h1| single_string(&h1))
            .map(|title| collapse_whitespace(&title))
            .filter(|title| !title.is_empty()),
        paragraphs: blocks.iter().map(paragraph_text).collect(),
    }
}

/// Joins the direct text-bearing children of a paragraph, skipping `<sup>`
/// footnote markers. Children with mixed content are dropped whole.
fn paragraph_text(block: &Handle) -> String {
    block
        .children
        .borrow()
        .iter()
        .filter(|child| !is_element(child, "sup"))
        .filter_map(single_string)
        .map(|piece| collapse_whitespace(&piece))
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// A text node, or an element whose only child reduces to a single string.
fn single_string(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Text { contents } => Some(contents.borrow().to_string()),
        NodeData::Element { .. } => {
            let children = node.children.borrow();
            match children.as_slice() {
                [only] => single_string(only),
                _ => None,
            }
        }
        _ => None,
    }
}

fn is_element(node: &Handle, tag: &str) -> bool {
    matches!(&node.data, NodeData::Element { name, .. } if &*name.local == tag)
}

fn collect_elements(node: &Handle, tag: &str, out: &mut Vec<Handle>) {
    for child in node.children.borrow().iter() {
        if is_element(child, tag) {
            out.push(child.clone());
        }
        collect_elements(child, tag, out);
    }
}

fn first_element(node: &Handle, tag: &str) -> Option<Handle> {
    node.children.borrow().iter().find_map(|child| {
        if is_element(child, tag) {
            Some(child.clone())
        } else {
            first_element(child, tag)
        }
    })
}
