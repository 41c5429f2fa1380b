//! Fixtures shared by the store and HTTP tests.
#![cfg(test)]

use sqlx::sqlite::SqlitePoolOptions;

use crate::database::country::TABLE;
use crate::database::Db;
use crate::utils::lang::Language;

/// A country row to seed. Languages missing from `names` get the English name.
pub(crate) struct Seed {
	pub code: &'static str,
	pub iso: &'static str,
	pub names: &'static [(Language, &'static str)],
	pub continent: Option<&'static str>,
	pub currency: Option<&'static str>,
	pub dialing_code: Option<&'static str>,
}

impl Seed {
	const fn pseudo(
		code: &'static str,
		iso: &'static str,
		names: &'static [(Language, &'static str)],
	) -> Self {
		Self {
			code,
			iso,
			names,
			continent: None,
			currency: None,
			dialing_code: None,
		}
	}

	fn name(&self, lang: Language) -> &'static str {
		let find = |wanted: Language| {
			self.names.iter().find(|(l, _)| *l == wanted).map(|(_, n)| *n)
		};
		find(lang).or_else(|| find(Language::En)).unwrap_or(self.iso)
	}
}

pub(crate) const SEEDS: &[Seed] = &[
	Seed {
		code: "fr",
		iso: "FRANCE",
		names: &[
			(Language::En, "France"),
			(Language::De, "Frankreich"),
			(Language::Fr, "France"),
			(Language::Es, "Francia"),
			(Language::Ja, "フランス"),
			(Language::ZhCn, "法国"),
			(Language::ZhHk, "法國"),
		],
		continent: Some("EU"),
		currency: Some("EUR"),
		dialing_code: Some("33"),
	},
	Seed {
		code: "de",
		iso: "GERMANY",
		names: &[
			(Language::En, "Germany"),
			(Language::De, "Deutschland"),
			(Language::Fr, "Allemagne"),
			(Language::Es, "Alemania"),
			(Language::Ja, "ドイツ"),
			(Language::ZhCn, "德国"),
			(Language::ZhHk, "德國"),
		],
		continent: Some("EU"),
		currency: Some("EUR"),
		dialing_code: Some("49"),
	},
	Seed {
		code: "at",
		iso: "AUSTRIA",
		names: &[
			(Language::En, "Austria"),
			(Language::De, "Österreich"),
			(Language::Fr, "Autriche"),
			(Language::Ja, "オーストリア"),
			(Language::ZhCn, "奥地利"),
			(Language::ZhHk, "奧地利"),
		],
		continent: Some("EU"),
		currency: Some("EUR"),
		dialing_code: Some("43"),
	},
	Seed {
		code: "jp",
		iso: "JAPAN",
		names: &[
			(Language::En, "Japan"),
			(Language::Fr, "Japon"),
			(Language::Es, "Japón"),
			(Language::Ja, "日本"),
			(Language::ZhCn, "日本"),
			(Language::ZhHk, "日本"),
		],
		continent: Some("AS"),
		currency: Some("JPY"),
		dialing_code: Some("81"),
	},
	Seed {
		code: "gb",
		iso: "UNITED KINGDOM",
		names: &[
			(Language::En, "United Kingdom"),
			(Language::De, "Vereinigtes Königreich"),
			(Language::Fr, "Royaume-Uni"),
			(Language::Es, "Reino Unido"),
		],
		continent: Some("EU"),
		currency: Some("GBP"),
		dialing_code: Some("44"),
	},
	Seed::pseudo("eu", "EUROPE", &[(Language::En, "Europe"), (Language::De, "Europa")]),
	Seed::pseudo("yu", "YUGOSLAVIA", &[(Language::En, "Yugoslavia")]),
	Seed::pseudo("ap", "ASIA/PACIFIC REGION", &[(Language::En, "Asia/Pacific Region")]),
	Seed::pseudo("nt", "NEUTRAL ZONE", &[(Language::En, "Neutral Zone")]),
	Seed::pseudo("aq", "ANTARCTICA", &[(Language::En, "Antarctica"), (Language::De, "Antarktis")]),
	Seed::pseudo("01", "SATELLITE PROVIDER", &[(Language::En, "Satellite Provider")]),
];

/// An in-memory database holding an empty `countries` table.
pub(crate) async fn empty_db() -> Db {
	db_with_ancillary_columns("continent TEXT, currency TEXT, dialing_code TEXT").await
}

/// An empty `countries` table whose non-name columns are declared by `ancillary`.
///
/// The pool keeps a single connection, since every SQLite memory connection
/// is its own database.
pub(crate) async fn db_with_ancillary_columns(ancillary: &str) -> Db {
	let db = SqlitePoolOptions::new()
		.max_connections(1)
		.connect("sqlite::memory:")
		.await
		.unwrap();

	let name_columns: Vec<String> = Language::ALL
		.iter()
		.map(|lang| format!("{} TEXT NOT NULL", lang.column()))
		.collect();

	sqlx::query(&format!(
		"CREATE TABLE {TABLE} (
			code TEXT PRIMARY KEY,
			country_iso TEXT NOT NULL,
			{},
			{ancillary}
		)",
		name_columns.join(",\n")
	))
	.execute(&db)
	.await
	.unwrap();

	db
}

/// An in-memory database seeded with [`SEEDS`].
pub(crate) async fn seeded_db() -> Db {
	let db = empty_db().await;
	for seed in SEEDS {
		insert(&db, seed).await;
	}
	db
}

pub(crate) async fn insert(db: &Db, seed: &Seed) {
	let columns: Vec<&str> = Language::ALL.iter().map(Language::column).collect();
	let placeholders: Vec<String> = (0..columns.len() + 5)
		.map(|i| format!("${}", i + 1))
		.collect();

	let sql = format!(
		"INSERT INTO {TABLE} (code, country_iso, continent, currency, dialing_code, {})
		VALUES ({})",
		columns.join(", "),
		placeholders.join(", ")
	);

	let mut query = sqlx::query(&sql)
		.bind(seed.code)
		.bind(seed.iso)
		.bind(seed.continent)
		.bind(seed.currency)
		.bind(seed.dialing_code);
	for lang in Language::ALL {
		query = query.bind(seed.name(lang));
	}

	query.execute(db).await.unwrap();
}
