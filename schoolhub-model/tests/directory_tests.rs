use pretty_assertions::assert_eq;
use schoolhub_model::{Category, Directory, SchoolRecord};
use schoolhub_types::RecordId;

fn record(name: &str) -> SchoolRecord {
    SchoolRecord::new(name, "Nairobi, Kenya", "Secondary")
}

fn names(directory: &Directory) -> Vec<&str> {
    directory.iter().map(|r| r.name.as_str()).collect()
}

// ── Construction ─────────────────────────────────────────────────

#[test]
fn new_is_empty() {
    let directory = Directory::new();
    assert!(directory.is_empty());
    assert_eq!(directory.len(), 0);
}

#[test]
fn from_records_preserves_order() {
    let directory = Directory::from_records([record("A"), record("B"), record("C")]);
    assert_eq!(names(&directory), ["A", "B", "C"]);
}

#[test]
fn from_records_drops_duplicate_ids_keeping_first() {
    let a = record("A");
    let mut imposter = record("B");
    imposter.id = a.id;

    let directory = Directory::from_records([a, imposter, record("C")]);
    assert_eq!(names(&directory), ["A", "C"]);
}

// ── Lookup ───────────────────────────────────────────────────────

#[test]
fn contains_and_get() {
    let a = record("A");
    let id = a.id;
    let directory = Directory::from_records([a]);

    assert!(directory.contains(&id));
    assert_eq!(directory.get(&id).unwrap().name, "A");
    assert!(!directory.contains(&RecordId::new()));
    assert!(directory.get(&RecordId::new()).is_none());
}

// ── insert_front / push_back ─────────────────────────────────────

#[test]
fn insert_front_prepends() {
    let mut directory = Directory::from_records([record("old")]);
    assert!(directory.insert_front(record("new")));
    assert_eq!(names(&directory), ["new", "old"]);
}

#[test]
fn insert_front_rejects_duplicate_id() {
    let a = record("A");
    let dup = a.clone();
    let mut directory = Directory::from_records([a]);

    assert!(!directory.insert_front(dup));
    assert_eq!(directory.len(), 1);
}

#[test]
fn push_back_rejects_duplicate_id() {
    let a = record("A");
    let dup = a.clone();
    let mut directory = Directory::from_records([a]);

    assert!(!directory.push_back(dup));
    assert_eq!(directory.len(), 1);
}

// ── replace / upsert ─────────────────────────────────────────────

#[test]
fn replace_preserves_position() {
    let b = record("B");
    let mut edited = b.clone();
    edited.name = "B prime".into();

    let mut directory = Directory::from_records([record("A"), b, record("C")]);
    assert!(directory.replace(edited));
    assert_eq!(names(&directory), ["A", "B prime", "C"]);
}

#[test]
fn replace_unknown_returns_false() {
    let mut directory = Directory::from_records([record("A")]);
    assert!(!directory.replace(record("stranger")));
    assert_eq!(directory.len(), 1);
}

#[test]
fn upsert_front_replaces_in_place() {
    let b = record("B");
    let mut edited = b.clone();
    edited.students = 99;

    let mut directory = Directory::from_records([record("A"), b]);
    let inserted = directory.upsert_front(edited);

    assert!(!inserted);
    assert_eq!(names(&directory), ["A", "B"]);
    assert_eq!(directory.records()[1].students, 99);
}

#[test]
fn upsert_front_prepends_unknown() {
    let mut directory = Directory::from_records([record("A")]);
    let inserted = directory.upsert_front(record("new"));

    assert!(inserted);
    assert_eq!(names(&directory), ["new", "A"]);
}

// ── remove ───────────────────────────────────────────────────────

#[test]
fn remove_returns_record() {
    let b = record("B");
    let id = b.id;
    let mut directory = Directory::from_records([record("A"), b, record("C")]);

    let removed = directory.remove(&id).unwrap();
    assert_eq!(removed.name, "B");
    assert_eq!(names(&directory), ["A", "C"]);
    assert!(!directory.contains(&id));
}

#[test]
fn remove_absent_is_noop() {
    let mut directory = Directory::from_records([record("A")]);
    assert!(directory.remove(&RecordId::new()).is_none());
    assert_eq!(directory.len(), 1);
}

#[test]
fn removed_id_can_be_reinserted() {
    let a = record("A");
    let id = a.id;
    let mut directory = Directory::from_records([a.clone()]);

    directory.remove(&id);
    assert!(directory.insert_front(a));
    assert!(directory.contains(&id));
}

#[test]
fn clear_empties_everything() {
    let a = record("A");
    let id = a.id;
    let mut directory = Directory::from_records([a]);

    directory.clear();
    assert!(directory.is_empty());
    assert!(!directory.contains(&id));
}

// ── stats ────────────────────────────────────────────────────────

#[test]
fn stats_over_empty_directory() {
    let stats = Directory::new().stats();
    assert_eq!(stats.schools, 0);
    assert_eq!(stats.students, 0);
    assert_eq!(stats.locations, 0);
    assert!(stats.by_category.is_empty());
}

#[test]
fn stats_aggregate() {
    let directory = Directory::from_records([
        SchoolRecord::new("A", "Nairobi, Kenya", "Secondary").with_students(450),
        SchoolRecord::new("B", "Nairobi, Kenya", "University").with_students(2500),
        SchoolRecord::new("C", "Mombasa, Kenya", "Secondary").with_students(350),
    ]);

    let stats = directory.stats();
    assert_eq!(stats.schools, 3);
    assert_eq!(stats.students, 3300);
    // Nairobi and Mombasa: the country suffix does not make new cities.
    assert_eq!(stats.locations, 2);
    assert_eq!(stats.by_category[&Category::new("Secondary")], 2);
    assert_eq!(stats.by_category[&Category::new("University")], 1);
}
