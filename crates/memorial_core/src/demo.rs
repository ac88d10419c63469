//! Demo content seeded into empty stores.

use crate::model::page::{Page, PageSeed};
use crate::model::person::{Person, RoleSummary, SUBJECT_ID};
use crate::model::relative::{Relation, Relative};
use crate::model::timeline::{Birth, CareerEntry, EducationEntry, FamilyEntry, Timeline};
use crate::repo::legacy_repo::LegacyDocument;

/// Demo page for the indexed store, id `demo_page_<now_ms>`.
pub fn demo_page(now_ms: i64) -> Page {
    let seed = PageSeed {
        person: Person {
            id: SUBJECT_ID.to_string(),
            name: "Анна Ивановна Смирнова".to_string(),
            years: "1945–2023".to_string(),
            quote: "Жизнь прекрасна, когда ты умеешь радоваться малому".to_string(),
            bio: "Родилась 7 октября 1945 года в послевоенной Москве. Всю свою жизнь посвятила \
                  преподаванию русского языка и литературы. Более 40 лет проработала в школе №127, \
                  где стала любимым учителем для нескольких поколений учеников."
                .to_string(),
            location: "Москва, Россия".to_string(),
            role_summary: RoleSummary {
                role: "Учитель русского языка и литературы высшей категории. Наставник молодых \
                       педагогов. Автор методических пособий."
                    .to_string(),
                loved: "Читать классическую литературу, особенно Пушкина и Чехова. Ухаживать за \
                        садом на даче. Готовить пироги по бабушкиным рецептам."
                    .to_string(),
                key_memory: "Её доброта, мудрость и безграничное терпение.".to_string(),
            },
            photo: None,
        },
        timeline: Timeline {
            birth: Birth {
                date: "07.10.1945".to_string(),
                place: "Москва".to_string(),
            },
            education: vec![EducationEntry {
                years: "1963–1968".to_string(),
                institution: "МГУ им. М.В. Ломоносова".to_string(),
                details: "Филологический факультет, кафедра русского языка".to_string(),
            }],
            career: vec![CareerEntry {
                years: "1968–2010".to_string(),
                position: "Учитель русского языка и литературы".to_string(),
                company: "Школа №127 г. Москвы".to_string(),
                details: "Учитель высшей категории, заслуженный педагог".to_string(),
            }],
            family: vec![
                FamilyEntry {
                    years: "1970–2023".to_string(),
                    members: "Супруг: Смирнов Пётр Николаевич".to_string(),
                    note: "Прожили вместе 53 года".to_string(),
                },
                FamilyEntry {
                    years: "1971–н.в.".to_string(),
                    members: "Дочь: Елена Петровна Волкова".to_string(),
                    note: String::new(),
                },
            ],
        },
        relatives: vec![
            relative("rel_1", "Пётр Николаевич Смирнов", Relation::Partner, "1943–2020", "Супруг"),
            relative("rel_2", "Елена Петровна Волкова", Relation::Daughter, "1971", ""),
            relative("rel_3", "Дмитрий Волков", Relation::Grandson, "1995", ""),
            relative("rel_4", "Анастасия Волкова", Relation::Granddaughter, "1998", ""),
        ],
    };
    Page::from_seed(format!("demo_page_{now_ms}"), seed)
}

/// Demo document for the single-page store.
pub fn demo_legacy_document() -> LegacyDocument {
    LegacyDocument {
        person: Person {
            id: SUBJECT_ID.to_string(),
            name: "Анна Ивановна Смирнова".to_string(),
            years: "1945–2023".to_string(),
            quote: "Жизнь прекрасна, когда ты умеешь радоваться малому".to_string(),
            bio: "Анна Ивановна родилась в небольшом городе на Урале. Всю жизнь посвятила \
                  педагогике.\n\nОна воспитала троих детей и помогала растить пятерых внуков."
                .to_string(),
            location: String::new(),
            role_summary: RoleSummary {
                role: "Учитель русского языка и литературы, мать троих детей".to_string(),
                loved: "Читать классическую литературу, ухаживать за цветами".to_string(),
                key_memory: "Её доброта, мудрость и умение находить радость в простых вещах."
                    .to_string(),
            },
            photo: None,
        },
        relatives: vec![
            relative("rel-1", "Иван Петрович Смирнов", Relation::Partner, "1943–2018", "Прожили вместе 55 лет"),
            relative("rel-2", "Мария Петровна", Relation::Mother, "1920–1998", ""),
            relative("rel-3", "Пётр Николаевич", Relation::Father, "1918–1995", ""),
            relative("rel-4", "Елена Ивановна", Relation::Daughter, "1968", "Старшая дочь"),
            relative("rel-5", "Дмитрий Иванович", Relation::Son, "1971", ""),
            relative("rel-6", "Ольга Ивановна", Relation::Daughter, "1975", "Младшая дочь"),
            relative("rel-7", "Александр", Relation::Grandson, "1992", ""),
            relative("rel-8", "Екатерина", Relation::Granddaughter, "1995", ""),
        ],
    }
}

fn relative(id: &str, name: &str, relation: Relation, years: &str, note: &str) -> Relative {
    Relative {
        id: id.to_string(),
        name: name.to_string(),
        relation,
        years: years.to_string(),
        photo: None,
        note: note.to_string(),
    }
}
