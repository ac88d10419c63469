use memorial_core::model::family_tree::{group_relatives, TreeRowKind, TreeSlot};
use memorial_core::render::family_tree::render_family_tree;
use memorial_core::{Person, Relation, Relative};

fn relative(id: &str, name: &str, relation: Relation) -> Relative {
    Relative {
        id: id.to_string(),
        name: name.to_string(),
        relation,
        years: String::new(),
        photo: None,
        note: String::new(),
    }
}

fn ids(members: &[&Relative]) -> Vec<String> {
    members.iter().map(|relative| relative.id.clone()).collect()
}

#[test]
fn relatives_land_in_exactly_one_bucket() {
    let relatives = vec![
        relative("r1", "Maria", Relation::Mother),
        relative("r2", "Pyotr", Relation::Partner),
        relative("r3", "Sergei", Relation::Son),
        relative("r4", "Misha", Relation::Grandson),
        relative("r5", "Olga", Relation::Sister),
        relative("r6", "Nina", Relation::Other),
        relative("r7", "Ivan", Relation::Father),
        relative("r8", "Lena", Relation::Granddaughter),
    ];

    let groups = group_relatives(&relatives);

    assert_eq!(ids(&groups.parents), vec!["r1", "r7"]);
    assert_eq!(ids(&groups.partner), vec!["r2"]);
    assert_eq!(ids(&groups.children), vec!["r3"]);
    assert_eq!(ids(&groups.grandchildren), vec!["r4", "r8"]);
    assert_eq!(ids(&groups.siblings), vec!["r5"]);
    assert_eq!(ids(&groups.other), vec!["r6"]);
}

#[test]
fn rows_place_subject_between_siblings_and_partner() {
    let relatives = vec![
        relative("r1", "Maria", Relation::Mother),
        relative("r2", "Pyotr", Relation::Partner),
        relative("r3", "Sergei", Relation::Son),
        relative("r4", "Misha", Relation::Grandson),
    ];
    let groups = group_relatives(&relatives);
    let rows = groups.rows();

    let kinds: Vec<_> = rows.iter().map(|row| row.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TreeRowKind::Parents,
            TreeRowKind::Subject,
            TreeRowKind::Children,
            TreeRowKind::Grandchildren,
        ]
    );
    assert_eq!(
        rows[1].slots,
        vec![TreeSlot::Subject, TreeSlot::Relative(&relatives[1])]
    );
}

#[test]
fn subject_row_exists_without_relatives() {
    let groups = group_relatives(&[]);
    let rows = groups.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].slots, vec![TreeSlot::Subject]);
}

#[test]
fn rendered_tree_lists_levels_in_order() {
    let person = Person::named("Anna");
    let relatives = vec![
        relative("r3", "Sergei", Relation::Son),
        relative("r1", "Maria", Relation::Mother),
    ];

    let html = render_family_tree(&person, &relatives).into_string();

    let mother = html.find("Maria").unwrap();
    let subject = html.find("main-person").unwrap();
    let son = html.find("Sergei").unwrap();
    assert!(mother < subject && subject < son);
    assert!(html.contains(r#"data-relative-id="r3""#));
    assert!(html.contains(">mother<"));
}

#[test]
fn empty_tree_renders_placeholder() {
    let html = render_family_tree(&Person::named("Anna"), &[]).into_string();
    assert!(html.contains("Add loved ones to the tree"));
    assert!(!html.contains("tree-container"));
}
