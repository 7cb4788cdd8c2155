use filmes::{field, DatasetCache, FormOptions, Interaction, Selection, Table};
use pretty_assertions::assert_eq;
use tests::{fixtures, tests, DbTest};

fn names(table: &Table) -> Vec<String> {
    table
        .column_values(field::NAME)
        .map(|value| value.to_string())
        .collect()
}

async fn search_matches_substring_ignoring_case(test: &mut DbTest) {
    test.seed(fixtures::catalog()).await;
    let db = test.setup_db().await;
    let table = DatasetCache::new().get(&db).await.unwrap();

    for text in ["knight", "KNIGHT", "Knight", "nIgH"] {
        let result = Selection::SearchByTitle(text.into()).apply(&table).unwrap();
        assert_eq!(
            names(&result),
            ["The Dark Knight", "Knight and Day"],
            "text={text:?}"
        );
    }

    let result = Selection::SearchByTitle("dark".into()).apply(&table).unwrap();
    assert_eq!(names(&result), ["The Dark Knight", "Dark City"]);

    let result = Selection::SearchByTitle("zzz".into()).apply(&table).unwrap();
    assert!(result.is_empty());
}

async fn search_result_is_exactly_the_matching_rows(test: &mut DbTest) {
    test.seed(fixtures::catalog()).await;
    let db = test.setup_db().await;
    let table = DatasetCache::new().get(&db).await.unwrap();

    for text in ["a", "e", "the", " ", "ll"] {
        let expected: Vec<String> = table
            .column_values(field::NAME)
            .filter_map(|value| value.as_str())
            .filter(|name| name.to_lowercase().contains(&text.to_lowercase()))
            .map(str::to_string)
            .collect();

        let result = Selection::SearchByTitle(text.into()).apply(&table).unwrap();
        assert_eq!(names(&result), expected, "text={text:?}");
    }
}

async fn every_listed_director_filters_exactly(test: &mut DbTest) {
    test.seed(fixtures::catalog()).await;
    let db = test.setup_db().await;
    let table = DatasetCache::new().get(&db).await.unwrap();
    let options = FormOptions::from_table(&table);

    assert_eq!(options.directors, ["Kurosawa", "Mann", "Nolan", "Proyas"]);

    let mut total = 0;
    for director in &options.directors {
        let result = Selection::FilterByDirector(director.clone())
            .apply(&table)
            .unwrap();

        assert!(!result.is_empty());
        assert!(result
            .column_values(field::DIRECTOR)
            .all(|value| value.as_str() == Some(director.as_str())));
        total += result.len();
    }

    // Everything except the film without a director.
    assert_eq!(total, table.len() - 1);
}

async fn director_filter_is_case_sensitive(test: &mut DbTest) {
    test.seed(fixtures::catalog()).await;
    let db = test.setup_db().await;
    let table = DatasetCache::new().get(&db).await.unwrap();

    let result = Selection::FilterByDirector("mann".into())
        .apply(&table)
        .unwrap();
    assert!(result.is_empty());

    let result = Selection::FilterByDirector("Mann".into())
        .apply(&table)
        .unwrap();
    assert_eq!(names(&result), ["Heat", "Collateral"]);
}

async fn resolved_selection_over_loaded_table(test: &mut DbTest) {
    test.seed(fixtures::catalog()).await;
    let db = test.setup_db().await;
    let table = DatasetCache::new().get(&db).await.unwrap();

    let interaction = Interaction::default()
        .show_all(true)
        .filter_director("Nolan")
        .search("heat");
    let selection = Selection::resolve(&interaction);
    assert_eq!(names(&selection.apply(&table).unwrap()), ["Heat"]);

    let interaction = Interaction::default()
        .show_all(true)
        .filter_director("Nolan");
    let selection = Selection::resolve(&interaction);
    assert_eq!(
        names(&selection.apply(&table).unwrap()),
        ["The Dark Knight", "Memento"]
    );

    let selection = Selection::resolve(&Interaction::default().show_all(true));
    assert_eq!(selection.apply(&table).unwrap().len(), 7);

    let selection = Selection::resolve(&Interaction::default());
    assert!(selection.is_none());
    assert_eq!(selection.apply(&table), None);
}

tests!(
    search_matches_substring_ignoring_case,
    search_result_is_exactly_the_matching_rows,
    every_listed_director_filters_exactly,
    director_filter_is_case_sensitive,
    resolved_selection_over_loaded_table,
);
