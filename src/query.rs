use std::collections::BTreeMap;

use crate::store::{doc_id_for_path, Document, DocumentStore};

/// Heading that opens the API section of a component page. The excerpt
/// returned by [`component_api`] starts at its first occurrence.
pub const API_SECTION_HEADING: &str = "### API";

/// Maximum number of matched content lines carried into a search snippet.
pub const SNIPPET_MAX_LINES: usize = 3;

/// One search hit, fully resolved for rendering.
///
/// Built fresh per query; nothing here is cached across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEntry {
    pub title: String,
    pub category: String,
    pub id: String,
    pub snippet: String,
    pub uri: String,
    pub tags: Vec<String>,
}

/// Case-insensitive substring search over titles, content, and tags.
///
/// A document matches when the lower-cased query occurs in its lower-cased
/// title, content body, or any tag. `component`, when supplied, restricts
/// the scan to documents whose title contains it (case-insensitive) before
/// any matching happens.
///
/// Title matches sort before content/tag-only matches; within each half,
/// entries keep the store's lexicographic id order. No match yields an
/// empty vector, never an error.
pub fn search(store: &DocumentStore, query: &str, component: Option<&str>) -> Vec<SearchEntry> {
    let needle = query.to_lowercase();
    let component = component.map(str::to_lowercase);

    let mut title_hits = Vec::new();
    let mut other_hits = Vec::new();

    for doc in store.iter() {
        if let Some(component) = &component {
            if !doc.title.to_lowercase().contains(component) {
                continue;
            }
        }

        let title_match = doc.title.to_lowercase().contains(&needle);
        let body_match = doc.content.value.to_lowercase().contains(&needle);
        let tag_match = doc.tags.iter().any(|tag| tag.to_lowercase().contains(&needle));
        if !(title_match || body_match || tag_match) {
            continue;
        }

        let entry = SearchEntry {
            title: doc.title.clone(),
            category: doc.category().to_string(),
            id: doc.id.clone(),
            snippet: snippet_for(doc, &needle),
            uri: doc.resource_uri(),
            tags: doc.tags.clone(),
        };
        if title_match {
            title_hits.push(entry);
        } else {
            other_hits.push(entry);
        }
    }

    title_hits.append(&mut other_hits);
    title_hits
}

/// At most [`SNIPPET_MAX_LINES`] content lines containing the needle,
/// joined by newlines. Title-only and tag-only matches fall back to a
/// generic placeholder.
fn snippet_for(doc: &Document, needle: &str) -> String {
    let matched: Vec<&str> = doc
        .content
        .value
        .lines()
        .filter(|line| line.to_lowercase().contains(needle))
        .take(SNIPPET_MAX_LINES)
        .collect();

    if matched.is_empty() {
        format!("Documentation for {}", doc.title)
    } else {
        matched.join("\n")
    }
}

/// API excerpt for one component, or a grouped listing of every known
/// title when the component is unknown.
///
/// Lookup tries exact case-insensitive title equality first, then falls
/// back to the id `/primevue/components/<lowercased name>`. The miss path
/// is a designed response, not an error: the caller gets a "did you mean"
/// listing instead of a failure.
pub fn component_api(store: &DocumentStore, component: &str) -> String {
    let wanted = component.to_lowercase();
    let doc = store
        .iter()
        .find(|doc| doc.title.to_lowercase() == wanted)
        .or_else(|| store.get(&doc_id_for_path(&format!("components/{wanted}"))));

    match doc {
        Some(doc) => render_api_excerpt(doc),
        None => format!(
            "Component \"{component}\" not found.\n\nAvailable documentation:\n\n{}",
            render_category_groups(&titles_by_category(store))
        ),
    }
}

fn render_api_excerpt(doc: &Document) -> String {
    let body = &doc.content.value;
    // Full content when the page has no dedicated API section.
    let section = match body.find(API_SECTION_HEADING) {
        Some(start) => &body[start..],
        None => body.as_str(),
    };

    let mut out = format!("# {} API\n\n**Category:** {}\n", doc.title, doc.category());
    if !doc.tags.is_empty() {
        out.push_str(&format!("**Tags:** {}\n", doc.tags.join(", ")));
    }
    out.push('\n');
    out.push_str(section);
    out
}

/// Grouped title listing, one group per category.
///
/// With a filter, only the case-insensitively equal category is kept; a
/// filter matching nothing yields an explanatory line with no groups.
pub fn list_categories(store: &DocumentStore, category: Option<&str>) -> String {
    let mut groups = titles_by_category(store);

    if let Some(filter) = category {
        let wanted = filter.to_lowercase();
        groups.retain(|name, _| name.to_lowercase() == wanted);
        if groups.is_empty() {
            return format!("No categories match \"{filter}\".");
        }
    } else if groups.is_empty() {
        return "No categories found.".to_string();
    }

    render_category_groups(&groups)
}

/// Titles grouped by category, both levels sorted lexicographically.
fn titles_by_category(store: &DocumentStore) -> BTreeMap<String, Vec<String>> {
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for doc in store.iter() {
        groups
            .entry(doc.category().to_string())
            .or_default()
            .push(doc.title.clone());
    }
    for titles in groups.values_mut() {
        titles.sort();
    }
    groups
}

fn render_category_groups(groups: &BTreeMap<String, Vec<String>>) -> String {
    groups
        .iter()
        .map(|(name, titles)| {
            let items = titles
                .iter()
                .map(|title| format!("- {title}"))
                .collect::<Vec<_>>()
                .join("\n");
            format!("## {name} ({})\n{items}", titles.len())
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
