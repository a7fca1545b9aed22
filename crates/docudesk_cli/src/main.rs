//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `docudesk_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use docudesk_core::{build_date_index, resolve_related, DocumentStore};

fn main() {
    println!("docudesk_core version={}", docudesk_core::core_version());

    let store = match DocumentStore::seeded() {
        Ok(store) => store,
        Err(err) => {
            eprintln!("seed fixture failed to load: {err}");
            std::process::exit(1);
        }
    };

    println!("documents={}", store.all().len());
    for document in store.all() {
        println!(
            "  {} `{}` [{}]",
            document.id,
            document.title,
            document.tags.join(", ")
        );
    }

    let index = build_date_index(store.all());
    println!("indexed_dates={}", index.len());
    for (date, entry) in &index {
        println!("  {date} kind={} docs={}", entry.kind.label(), entry.document_ids.len());
    }

    let graph = resolve_related("doc-001", store.all());
    println!(
        "graph focus={} related={} edges={}",
        graph.focus().id,
        graph.related().len(),
        graph.edges.len()
    );
}
