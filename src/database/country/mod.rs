use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::database::Db;
use crate::error::{Error, Result};
use crate::utils::lang::Language;

#[cfg(test)]
mod tests;

pub const TABLE: &str = "countries";

/// Codes stored in the table that are not real countries (obsolete or
/// regional groupings). They never show up in listings.
pub const PSEUDO_COUNTRY_CODES: [&str; 6] = ["yu", "eu", "ap", "nt", "aq", "01"];

/// A country as returned to callers, named in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
	pub code: String,
	pub name: String,
	pub country_iso: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub iso3: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub continent: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub currency: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub dialing_code: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tld: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct CountryName {
	pub code: String,
	pub name: String,
}

/// One full row of the `countries` table.
#[derive(Debug)]
struct CountryRow {
	code: String,
	country_iso: String,
	country_ar: String,
	country_cs: String,
	country_da: String,
	country_de: String,
	country_en: String,
	country_es: String,
	country_fr: String,
	country_he: String,
	country_it: String,
	country_ja: String,
	country_nl: String,
	country_pt: String,
	country_ru: String,
	country_sk: String,
	country_zh_cn: String,
	country_zh_hk: String,
	iso3: Option<String>,
	continent: Option<String>,
	currency: Option<String>,
	dialing_code: Option<String>,
	tld: Option<String>,
}

/// Read an ancillary column as text whatever its declared type.
/// A missing column reads as `None`.
fn ancillary(row: &SqliteRow, column: &str) -> sqlx::Result<Option<String>> {
	match row.try_get_unchecked::<Option<String>, _>(column) {
		Err(sqlx::Error::ColumnNotFound(_)) => Ok(None),
		other => other,
	}
}

impl<'r> sqlx::FromRow<'r, SqliteRow> for CountryRow {
	fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
		Ok(Self {
			code: row.try_get("code")?,
			country_iso: row.try_get("country_iso")?,
			country_ar: row.try_get("country_ar")?,
			country_cs: row.try_get("country_cs")?,
			country_da: row.try_get("country_da")?,
			country_de: row.try_get("country_de")?,
			country_en: row.try_get("country_en")?,
			country_es: row.try_get("country_es")?,
			country_fr: row.try_get("country_fr")?,
			country_he: row.try_get("country_he")?,
			country_it: row.try_get("country_it")?,
			country_ja: row.try_get("country_ja")?,
			country_nl: row.try_get("country_nl")?,
			country_pt: row.try_get("country_pt")?,
			country_ru: row.try_get("country_ru")?,
			country_sk: row.try_get("country_sk")?,
			country_zh_cn: row.try_get("country_zh_cn")?,
			country_zh_hk: row.try_get("country_zh_hk")?,
			iso3: ancillary(row, "iso3")?,
			continent: ancillary(row, "continent")?,
			currency: ancillary(row, "currency")?,
			dialing_code: ancillary(row, "dialing_code")?,
			tld: ancillary(row, "tld")?,
		})
	}
}

impl CountryRow {
	fn into_country(self, lang: Language) -> Country {
		let name = match lang {
			Language::Ar => self.country_ar,
			Language::Cs => self.country_cs,
			Language::Da => self.country_da,
			Language::De => self.country_de,
			Language::En => self.country_en,
			Language::Es => self.country_es,
			Language::Fr => self.country_fr,
			Language::He => self.country_he,
			Language::It => self.country_it,
			Language::Ja => self.country_ja,
			Language::Nl => self.country_nl,
			Language::Pt => self.country_pt,
			Language::Ru => self.country_ru,
			Language::Sk => self.country_sk,
			Language::ZhCn => self.country_zh_cn,
			Language::ZhHk => self.country_zh_hk,
		};

		Country {
			code: self.code,
			name,
			country_iso: self.country_iso,
			iso3: self.iso3,
			continent: self.continent,
			currency: self.currency,
			dialing_code: self.dialing_code,
			tld: self.tld,
		}
	}
}

impl Country {
	/// Fetch the name of a country in the given language.
	#[tracing::instrument(skip(db))]
	pub async fn lookup_name(db: &Db, code: &str, lang: Option<&str>) -> Result<String> {
		let lang = Language::resolve(lang)?;
		let code = code.to_lowercase();

		let sql = format!("SELECT {} FROM {TABLE} WHERE code = $1", lang.column());
		let name: Option<String> = sqlx::query_scalar(&sql)
			.bind(&code)
			.fetch_optional(db)
			.await?;

		name.ok_or(Error::NotFound(code))
	}

	/// Fetch every real country as a code and name pair, ordered by name.
	#[tracing::instrument(skip(db))]
	pub async fn list_all(db: &Db, lang: Option<&str>) -> Result<Vec<CountryName>> {
		let lang = Language::resolve(lang)?;
		let column = lang.column();

		let sql = format!("SELECT code, {column} AS name FROM {TABLE} ORDER BY {column} ASC");
		let rows: Vec<CountryName> = sqlx::query_as(&sql).fetch_all(db).await?;

		let total = rows.len();
		let names: Vec<CountryName> = rows
			.into_iter()
			.filter(|row| !PSEUDO_COUNTRY_CODES.contains(&row.code.as_str()))
			.collect();

		tracing::debug!(total, kept = names.len(), "listed countries");
		Ok(names)
	}

	/// Fetch the whole row of a country, named only in the given language.
	#[tracing::instrument(skip(db))]
	pub async fn find(db: &Db, code: &str, lang: Option<&str>) -> Result<Self> {
		let lang = Language::resolve(lang)?;
		let code = code.to_lowercase();

		let sql = format!("SELECT * FROM {TABLE} WHERE code = $1");
		let row: Option<CountryRow> = sqlx::query_as(&sql)
			.bind(&code)
			.fetch_optional(db)
			.await?;

		row.map(|row| row.into_country(lang))
			.ok_or(Error::NotFound(code))
	}
}

/// Count the rows of the `countries` table. Fails if the table is missing.
#[tracing::instrument(skip(db))]
pub async fn count(db: &Db) -> Result<i64> {
	let rows: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {TABLE}"))
		.fetch_one(db)
		.await?;

	Ok(rows)
}
