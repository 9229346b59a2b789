use rwa_query::{Pipeline, Searchable};

#[derive(Searchable)]
#[search(name, location)]
struct Site {
    id: u32,
    name: String,
    location: String,
    note: String,
}

#[derive(Searchable)]
#[search(hash)]
struct Receipt {
    hash: &'static str,
}

fn sites() -> Vec<Site> {
    vec![
        Site {
            id: 1,
            name: "GPU Cluster #3".to_string(),
            location: "Austin, TX".to_string(),
            note: "solar backup".to_string(),
        },
        Site {
            id: 2,
            name: "Solar Farm #42".to_string(),
            location: "Nevada".to_string(),
            note: String::new(),
        },
    ]
}

#[test]
fn derive_lists_fields_in_attribute_order() {
    let site = &sites()[0];
    assert_eq!(site.search_fields(), vec!["GPU Cluster #3", "Austin, TX"]);
    assert!(!site.note.is_empty());
}

#[test]
fn derive_accepts_str_fields() {
    let receipt = Receipt { hash: "0x1a2b3c" };
    assert_eq!(receipt.search_fields(), vec!["0x1a2b3c"]);
}

#[test]
fn derived_fields_drive_text_search() {
    let data = sites();
    let by_location: Vec<u32> = Pipeline::<Site>::new().search("austin").apply(&data).iter().map(|s| s.id).collect();
    assert_eq!(by_location, vec![1]);

    // `note` is not a search field
    let by_note: Vec<u32> = Pipeline::<Site>::new().search("backup").apply(&data).iter().map(|s| s.id).collect();
    assert!(by_note.is_empty());

    let by_name: Vec<u32> = Pipeline::<Site>::new().search("SOLAR").apply(&data).iter().map(|s| s.id).collect();
    assert_eq!(by_name, vec![2]);
}
