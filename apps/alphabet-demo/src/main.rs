use std::collections::BTreeMap;

use uiwidgets_list::{Indexable, IndexableList, IndexableListAdapter, ListRow, SectionIndexer};

const CONTACTS: &[&str] = &[
    "Ada Lovelace",
    "Alan Turing",
    "Barbara Liskov",
    "Dennis Ritchie",
    "Donald Knuth",
    "Edsger Dijkstra",
    "Grace Hopper",
    "Ken Thompson",
    "Margaret Hamilton",
    "Niklaus Wirth",
    "Radia Perlman",
    "Tony Hoare",
];

/// Groups contacts into one section per initial letter.
fn contact_sections(names: &[&'static str]) -> Vec<IndexableList<char, &'static str>> {
    let mut by_letter: BTreeMap<char, IndexableList<char, &'static str>> = BTreeMap::new();
    for &name in names {
        let letter = name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('#');
        by_letter
            .entry(letter)
            .or_insert_with(|| IndexableList::new(letter, letter.to_string()))
            .push(name);
    }
    by_letter.into_values().collect()
}

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let adapter = IndexableListAdapter::new(contact_sections(CONTACTS))?;
    log::info!(
        "built adapter: {} sections, {} rows",
        adapter.group_count(),
        adapter.row_count()
    );

    println!("=== Alphabet fast-scroll demo ===");
    println!("Jump index: {}", adapter.sections().join(" "));
    println!();

    for position in 0..adapter.row_count() {
        match adapter.row(position) {
            Some(ListRow::Header { section, .. }) => {
                println!("{position:>3}  [{}]", section.index_label());
            }
            Some(ListRow::Child { item, .. }) => println!("{position:>3}      {item}"),
            None => {}
        }
    }
    println!();

    // Tapping a letter scrolls to its header; scrolling highlights the owning letter.
    for (section, label) in adapter.sections().iter().enumerate() {
        let position = adapter.position_for_section(section as i32);
        println!("tap {label:>2} -> scroll to row {position}");
    }
    let scrolled_to = 7;
    let highlighted = adapter.section_for_position(scrolled_to);
    println!(
        "scrolled to row {scrolled_to} -> highlight {}",
        usize::try_from(highlighted)
            .ok()
            .and_then(|section| adapter.sections().get(section))
            .map(String::as_str)
            .unwrap_or("-")
    );

    // A stale section from before a data change: logged, answered with -1.
    let stale = adapter.position_for_section(adapter.group_count() as i32 + 3);
    println!("stale section query -> {stale}");

    let items = adapter.item_index()?;
    println!(
        "contacts only: {} items, starts {:?}",
        items.total_items(),
        items.starts()
    );

    Ok(())
}
