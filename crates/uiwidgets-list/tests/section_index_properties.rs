//! Property tests for position/section translation.

use proptest::prelude::*;
use uiwidgets_list::{
    IndexableList, RecordingObserver, SectionIndex, SectionIndexer, INVALID_POSITION,
    INVALID_SECTION,
};

fn arb_sizes() -> impl Strategy<Value = Vec<usize>> {
    // Plenty of zeros so empty sections and duplicate starts show up often.
    prop::collection::vec(prop_oneof![Just(0usize), 1usize..6], 0..12)
}

fn build(sizes: &[usize]) -> SectionIndex<RecordingObserver> {
    SectionIndex::from_sizes_with_observer(
        sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| (i.to_string(), size)),
        RecordingObserver::new(),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn position_for_section_is_prefix_sum(sizes in arb_sizes()) {
        let index = build(&sizes);
        for section in 0..sizes.len() {
            let expected: usize = sizes[..section].iter().sum();
            prop_assert_eq!(index.position_for_section(section as i32), expected as i32);
        }
        prop_assert!(index.observer().warnings().is_empty());
    }

    #[test]
    fn every_position_maps_to_its_owner(sizes in arb_sizes()) {
        let index = build(&sizes);
        let mut position = 0i32;
        for (section, &size) in sizes.iter().enumerate() {
            for _ in 0..size {
                prop_assert_eq!(index.section_for_position(position), section as i32);
                position += 1;
            }
        }
        prop_assert_eq!(index.section_for_position(position), INVALID_SECTION);
    }

    #[test]
    fn non_empty_sections_round_trip(sizes in arb_sizes()) {
        let index = build(&sizes);
        for (section, &size) in sizes.iter().enumerate() {
            if size > 0 {
                let start = index.position_for_section(section as i32);
                prop_assert_eq!(index.section_for_position(start), section as i32);
            }
        }
    }

    #[test]
    fn outside_sections_yield_sentinels(sizes in arb_sizes(), below in 1i32..100) {
        let index = build(&sizes);
        let n = sizes.len() as i32;
        prop_assert_eq!(index.position_for_section(-below), INVALID_POSITION);
        prop_assert_eq!(index.position_for_section(n), INVALID_POSITION);
        prop_assert_eq!(index.section_for_position(-below), INVALID_SECTION);
        prop_assert_eq!(index.observer().take().len(), 3);
    }
}

#[test]
fn empty_input_answers_nothing() {
    let sections: Vec<IndexableList<char, String>> = Vec::new();
    let index = SectionIndex::new(&sections).unwrap();
    assert!(index.sections().is_empty());
    assert_eq!(index.position_for_section(0), INVALID_POSITION);
    assert_eq!(index.section_for_position(0), INVALID_SECTION);
    assert_eq!(index.section_for_position(-1), INVALID_SECTION);
}

#[test]
fn mutation_after_build_does_not_leak_into_index() {
    let mut people = IndexableList::new('p', "P");
    people.append_all(["Pat", "Peg", "Pim"]);
    let mut quiet = IndexableList::new('q', "Q");
    quiet.push("Quinn");

    let mut sections = vec![people, quiet];
    let index = SectionIndex::from_sections(sections.iter()).unwrap();
    let before: Vec<i32> = (0..5).map(|p| index.section_for_position(p)).collect();

    sections[0].remove(0).unwrap();
    sections[1].append_all(["Quade", "Quill"]);
    let after: Vec<i32> = (0..5).map(|p| index.section_for_position(p)).collect();

    assert_eq!(before, vec![0, 0, 0, 1, INVALID_SECTION]);
    assert_eq!(before, after);
    assert_eq!(index.position_for_section(1), 3);
    assert_eq!(index.sizes(), &[3, 1]);

    let rebuilt = SectionIndex::new(&sections).unwrap();
    assert_eq!(rebuilt.position_for_section(1), 2);
    assert_eq!(rebuilt.section_for_position(4), 1);
}
