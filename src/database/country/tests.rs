use super::*;
use crate::test_utils::{db_with_ancillary_columns, empty_db, insert, seeded_db, SEEDS};
use tracing_test::traced_test;

#[tokio::test]
#[traced_test]
async fn test_lookup_name() {
    let db = seeded_db().await;

    assert_eq!(Country::lookup_name(&db, "fr", Some("de")).await.unwrap(), "Frankreich");
    assert_eq!(Country::lookup_name(&db, "fr", None).await.unwrap(), "France");
    assert_eq!(Country::lookup_name(&db, "de", Some("zh_TW")).await.unwrap(), "德國");
    assert_eq!(Country::lookup_name(&db, "de", Some("zh")).await.unwrap(), "德国");
    assert_eq!(Country::lookup_name(&db, "jp", Some("ja_JP")).await.unwrap(), "日本");

    // Country codes are case-insensitive
    assert_eq!(Country::lookup_name(&db, "FR", Some("es")).await.unwrap(), "Francia");
    assert_eq!(Country::lookup_name(&db, "Gb", Some("fr-CA")).await.unwrap(), "Royaume-Uni");
}

#[tokio::test]
#[traced_test]
async fn test_lookup_name_errors() {
    let db = seeded_db().await;

    match Country::lookup_name(&db, "zz", Some("en")).await {
        Err(Error::NotFound(code)) => assert_eq!(code, "zz"),
        other => panic!("expected NotFound, got {other:?}"),
    }

    match Country::lookup_name(&db, "fr", Some("ko-KR")).await {
        Err(Error::InvalidArgument(tag)) => assert_eq!(tag, "ko-KR"),
        other => panic!("expected InvalidArgument, got {other:?}"),
    }

    // Hostile input is bound as a value, never spliced into the statement
    let injected = Country::lookup_name(&db, "fr' OR '1'='1", None).await;
    assert!(matches!(injected, Err(Error::NotFound(_))));
}

#[tokio::test]
#[traced_test]
async fn test_list_all_ordered_by_name() {
    let db = seeded_db().await;

    let names = Country::list_all(&db, Some("en")).await.unwrap();
    let codes: Vec<&str> = names.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, ["at", "fr", "de", "jp", "gb"]);
    assert_eq!(names[0], CountryName { code: "at".into(), name: "Austria".into() });

    for lang in Language::ALL {
        let names = Country::list_all(&db, Some(lang.as_str())).await.unwrap();
        assert_eq!(names.len(), 5, "unexpected listing size for {lang}");
        assert!(
            names.windows(2).all(|pair| pair[0].name <= pair[1].name),
            "listing for {lang} is not ordered: {names:?}"
        );
    }
}

#[tokio::test]
#[traced_test]
async fn test_list_all_skips_pseudo_countries() {
    let db = seeded_db().await;

    for lang in [None, Some("de"), Some("zh-sg"), Some("pt_BR")] {
        let names = Country::list_all(&db, lang).await.unwrap();
        for name in &names {
            assert!(
                !PSEUDO_COUNTRY_CODES.contains(&name.code.as_str()),
                "pseudo country {} listed for {lang:?}",
                name.code
            );
        }
    }

    let names = Country::list_all(&db, Some("en")).await.unwrap();
    assert!(names.iter().all(|c| c.code != "eu"));
}

#[tokio::test]
#[traced_test]
async fn test_list_all_empty() {
    let db = empty_db().await;
    assert!(Country::list_all(&db, None).await.unwrap().is_empty());

    let result = Country::list_all(&db, Some("x")).await;
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[tokio::test]
#[traced_test]
async fn test_find() {
    let db = seeded_db().await;

    let country = Country::find(&db, "FR", Some("de")).await.unwrap();
    assert_eq!(
        country,
        Country {
            code: "fr".into(),
            name: "Frankreich".into(),
            country_iso: "FRANCE".into(),
            iso3: None,
            continent: Some("EU".into()),
            currency: Some("EUR".into()),
            dialing_code: Some("33".into()),
            tld: None,
        }
    );

    // Only the resolved name and the ISO name survive serialization
    let json = serde_json::to_value(&country).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object["name"], "Frankreich");
    assert_eq!(object["country_iso"], "FRANCE");
    assert!(object.keys().filter(|k| k.starts_with("country_")).all(|k| k == "country_iso"));
    assert!(!object.contains_key("tld"));
}

#[tokio::test]
#[traced_test]
async fn test_find_errors() {
    let db = seeded_db().await;

    assert!(matches!(Country::find(&db, "zz", None).await, Err(Error::NotFound(_))));
    assert!(matches!(Country::find(&db, "", None).await, Err(Error::NotFound(_))));
    assert!(matches!(Country::find(&db, "fr", Some("")).await, Err(Error::InvalidArgument(_))));
}

#[tokio::test]
#[traced_test]
async fn test_find_matches_lookup_name() {
    let db = seeded_db().await;

    for code in ["fr", "de", "at", "jp", "gb", "eu"] {
        for lang in Language::ALL {
            let tag = Some(lang.as_str());
            let country = Country::find(&db, code, tag).await.unwrap();
            let name = Country::lookup_name(&db, code, tag).await.unwrap();
            assert_eq!(country.name, name, "{code} in {lang}");
        }
    }
}

#[tokio::test]
#[traced_test]
async fn test_query_error_on_missing_table() {
    let db = empty_db().await;
    sqlx::query("DROP TABLE countries").execute(&db).await.unwrap();

    assert!(matches!(Country::lookup_name(&db, "fr", None).await, Err(Error::Query(_))));
    assert!(matches!(Country::list_all(&db, None).await, Err(Error::Query(_))));
    assert!(matches!(Country::find(&db, "fr", None).await, Err(Error::Query(_))));
    assert!(matches!(count(&db).await, Err(Error::Query(_))));
}

#[tokio::test]
#[traced_test]
async fn test_count() {
    assert_eq!(count(&empty_db().await).await.unwrap(), 0);
    assert_eq!(count(&seeded_db().await).await.unwrap(), SEEDS.len() as i64);
}

#[tokio::test]
#[traced_test]
async fn test_find_reads_numeric_ancillary_columns_as_text() {
    let db = db_with_ancillary_columns(
        "continent TEXT, currency TEXT, dialing_code INTEGER, population INTEGER",
    )
    .await;
    insert(&db, &SEEDS[0]).await;
    sqlx::query("UPDATE countries SET population = 67000000 WHERE code = 'fr'")
        .execute(&db)
        .await
        .unwrap();

    let stored: String =
        sqlx::query_scalar("SELECT typeof(dialing_code) FROM countries WHERE code = 'fr'")
            .fetch_one(&db)
            .await
            .unwrap();
    assert_eq!(stored, "integer");

    let country = Country::find(&db, "fr", None).await.unwrap();
    assert_eq!(country.dialing_code.as_deref(), Some("33"));
    assert_eq!(country.currency.as_deref(), Some("EUR"));
    assert_eq!(country.iso3, None);
    assert_eq!(country.name, Country::lookup_name(&db, "fr", None).await.unwrap());
}
