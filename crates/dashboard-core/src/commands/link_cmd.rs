//! Link Commands

use super::{find_container_ref, move_child_to, normalize_tags, push_child, remove_child, reorder_children, required, update_child};
use crate::domain::{favicon_url, Clock, DomainResult, EntityId, Link, Snapshot};

/// Fields collected by the "Add Link" form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkDraft {
    pub title: String,
    pub url: String,
    pub description: String,
}

impl LinkDraft {
    /// Both title and url must be non-blank before the form submits
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.url.trim().is_empty()
    }
}

/// Save a new link; returns its id
pub fn add_link(snapshot: &mut Snapshot, collection_id: &EntityId, draft: &LinkDraft, clock: &dyn Clock) -> DomainResult<EntityId> {
    let title = required(&draft.title, "title")?;
    let url = required(&draft.url, "url")?;
    let collection = find_container_ref(&snapshot.links, collection_id)?;
    let id = EntityId::generate(clock, collection.links.iter().map(|l| &l.id));
    let link = Link::new(id.clone(), title, url, clock.today()).with_description(draft.description.trim());
    if link.favicon.is_none() {
        tracing::warn!(url = %link.url, "link saved with unparseable url");
    }
    push_child(&mut snapshot.links, collection_id, link)?;
    Ok(id)
}

/// Replace title, url and description; the favicon follows the url
pub fn update_link(snapshot: &mut Snapshot, collection_id: &EntityId, link_id: &EntityId, draft: &LinkDraft) -> DomainResult<()> {
    let title = required(&draft.title, "title")?;
    let url = required(&draft.url, "url")?;
    let description = draft.description.trim().to_string();
    update_child(&mut snapshot.links, collection_id, link_id, |link| {
        link.favicon = favicon_url(&url);
        link.title = title;
        link.url = url;
        link.description = description;
    })
}

pub fn set_link_tags<S: AsRef<str>>(
    snapshot: &mut Snapshot,
    collection_id: &EntityId,
    link_id: &EntityId,
    tags: &[S],
) -> DomainResult<()> {
    let tags = normalize_tags(tags);
    update_child(&mut snapshot.links, collection_id, link_id, |link| link.tags = tags)
}

/// Remove exactly the link with `link_id`
pub fn delete_link(snapshot: &mut Snapshot, collection_id: &EntityId, link_id: &EntityId) -> DomainResult<()> {
    remove_child(&mut snapshot.links, collection_id, link_id).map(|_| ())
}

pub fn reorder_links(snapshot: &mut Snapshot, collection_id: &EntityId, active: &EntityId, over: &EntityId) -> DomainResult<bool> {
    reorder_children(&mut snapshot.links, collection_id, active, over)
}

pub fn move_link_to(snapshot: &mut Snapshot, collection_id: &EntityId, link_id: &EntityId, position: usize) -> DomainResult<bool> {
    move_child_to(&mut snapshot.links, collection_id, link_id, position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, FixedClock};

    fn draft(title: &str, url: &str) -> LinkDraft {
        LinkDraft { title: title.into(), url: url.into(), description: "  docs ".into() }
    }

    #[test]
    fn test_add_link_requires_title_and_url() {
        let mut snapshot = Snapshot::seed();
        let tools = EntityId::from("tools");
        let clock = FixedClock::at_millis(1_705_000_000_000);

        assert!(!draft("", "https://x.dev").is_complete());
        assert!(matches!(
            add_link(&mut snapshot, &tools, &draft("", "https://x.dev"), &clock),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(add_link(&mut snapshot, &tools, &draft("X", "  "), &clock).is_err());

        let id = add_link(&mut snapshot, &tools, &draft(" Rust ", "https://www.rust-lang.org"), &clock).unwrap();
        let link = &snapshot.links[1].links[0];
        assert_eq!(link.id, id);
        assert_eq!(link.title, "Rust");
        assert_eq!(link.description, "docs");
        assert!(link.tags.is_empty());
        assert_eq!(link.hostname().as_deref(), Some("www.rust-lang.org"));
        assert!(link.favicon.is_some());
        assert_eq!(snapshot.links[1].count, 1);
    }

    #[test]
    fn test_malformed_url_is_kept_without_favicon() {
        let mut snapshot = Snapshot::seed();
        let tools = EntityId::from("tools");
        add_link(&mut snapshot, &tools, &draft("Local", "intranet/wiki"), &FixedClock::at_millis(0)).unwrap();
        assert!(snapshot.links[1].links[0].favicon.is_none());
    }

    #[test]
    fn test_delete_link_removes_exactly_target() {
        let mut snapshot = Snapshot::seed();
        let reading = EntityId::from("reading");
        delete_link(&mut snapshot, &reading, &"2".into()).unwrap();

        let ids: Vec<_> = snapshot.links[0].links.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
        assert_eq!(snapshot.links[0].count, 2);
        assert!(matches!(
            delete_link(&mut snapshot, &reading, &"2".into()),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn test_update_link_refreshes_favicon() {
        let mut snapshot = Snapshot::seed();
        let reading = EntityId::from("reading");
        update_link(&mut snapshot, &reading, &"1".into(), &draft("Docs", "https://docs.rs")).unwrap();
        set_link_tags(&mut snapshot, &reading, &"1".into(), &["rust"]).unwrap();

        let link = &snapshot.links[0].links[0];
        assert_eq!(link.url, "https://docs.rs");
        assert_eq!(link.favicon.as_deref(), Some("https://www.google.com/s2/favicons?domain=docs.rs&sz=32"));
        assert_eq!(link.tags, vec!["rust"]);
    }
}
