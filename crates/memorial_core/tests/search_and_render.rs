use memorial_core::model::page::PageSummary;
use memorial_core::render::list::{profile_href, render_pages_grid, token_id};
use memorial_core::render::profile::{page_title, render_bio_tab, render_profile_header};
use memorial_core::search::filter::{filter_pages, SearchOutcome};
use memorial_core::Person;

fn summary(id: &str, name: &str) -> PageSummary {
    PageSummary {
        id: id.to_string(),
        name: name.to_string(),
        years: String::new(),
        photo: None,
        created_at: 1,
        last_modified: 1,
    }
}

fn collection() -> Vec<PageSummary> {
    vec![
        summary("page_1", "Anna Ivanovna"),
        summary("page_2", "Ivan Petrov"),
    ]
}

#[test]
fn search_matches_case_insensitive_substring() {
    let outcome = filter_pages(&collection(), "  ANNA ");
    let ids: Vec<_> = outcome.matches().iter().map(|page| page.id.as_str()).collect();
    assert_eq!(ids, vec!["page_1"]);

    let both = filter_pages(&collection(), "ivan");
    assert_eq!(both.matches().len(), 2);
}

#[test]
fn blank_query_returns_everything_in_order() {
    assert_eq!(
        filter_pages(&collection(), "   "),
        SearchOutcome::Matches(collection())
    );
}

#[test]
fn empty_and_unmatched_results_are_distinguished() {
    assert_eq!(filter_pages(&[], ""), SearchOutcome::NoPages);
    assert_eq!(
        filter_pages(&collection(), "Olga"),
        SearchOutcome::NoMatches {
            query: "olga".to_string()
        }
    );
}

#[test]
fn grid_messages_follow_outcome() {
    let empty = render_pages_grid(&SearchOutcome::NoPages).into_string();
    assert!(empty.contains("The collection is empty"));

    let none = render_pages_grid(&filter_pages(&collection(), "olga")).into_string();
    assert!(none.contains("Nothing found for «olga»"));
    assert!(none.contains(r#"data-action="clear-search""#));

    let cards = render_pages_grid(&filter_pages(&collection(), "")).into_string();
    assert_eq!(cards.matches("page-card-name").count(), 2);
    assert!(cards.contains(&format!("#{}", token_id("page_1"))));
    assert!(cards.contains(&profile_href("page_2")));
}

#[test]
fn record_text_is_escaped_everywhere() {
    let hostile = r#"<script>alert("x")</script>"#;
    let pages = vec![summary("page_1", hostile)];
    let grid = render_pages_grid(&filter_pages(&pages, "")).into_string();
    assert!(!grid.contains("<script>"));
    assert!(grid.contains("&lt;script&gt;"));

    let query_echo = render_pages_grid(&filter_pages(&pages, "<b>")).into_string();
    assert!(!query_echo.contains("<b>"));

    let mut person = Person::named(hostile);
    person.photo = Some(r#"x" onerror="alert(1)"#.to_string());
    person.bio = "line one\n<i>line two</i>".to_string();
    let header = render_profile_header(&person).into_string();
    assert!(!header.contains("<script>"));
    assert!(!header.contains(r#"" onerror=""#));

    let bio = render_bio_tab(&person).into_string();
    assert!(bio.contains("line one<br>"));
    assert!(bio.contains("&lt;i&gt;line two&lt;/i&gt;"));
}

#[test]
fn profile_fallbacks_and_title() {
    let unnamed = Person::default();
    assert!(render_profile_header(&unnamed)
        .into_string()
        .contains("Name not specified"));
    assert!(render_bio_tab(&unnamed)
        .into_string()
        .contains("No biography yet"));
    assert_eq!(page_title(&Person::named("Anna")), "Anna — Memorial page");
}

#[test]
fn token_ids_are_stable_and_padded() {
    assert_eq!(token_id("a"), "EMT-0097");
    assert_eq!(token_id(""), "EMT-0000");
    let token = token_id("page_1700000000000_abcdefghi");
    assert_eq!(token, token_id("page_1700000000000_abcdefghi"));
    assert_eq!(token.len(), "EMT-0000".len());
}
