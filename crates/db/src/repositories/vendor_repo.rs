//! Repository for the `vendors` table (Localized Vendor Ratings).

use sqlx::PgPool;

use crate::models::vendor::{seed_vendors, Vendor};

const COLUMNS: &str = "name, vendor_type, lvr_score, reliability, price_competitiveness, contact";

pub struct VendorRepo;

impl VendorRepo {
    /// Number of vendor rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM vendors")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// All vendors in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Vendor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vendors ORDER BY id ASC");
        sqlx::query_as::<_, Vendor>(&query).fetch_all(pool).await
    }

    /// Insert every vendor in one transaction.
    pub async fn insert_many(pool: &PgPool, vendors: &[Vendor]) -> Result<u64, sqlx::Error> {
        let query = format!(
            "INSERT INTO vendors ({COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6)"
        );
        let mut tx = pool.begin().await?;
        let mut inserted = 0;
        for vendor in vendors {
            inserted += sqlx::query(&query)
                .bind(&vendor.name)
                .bind(&vendor.vendor_type)
                .bind(vendor.lvr_score)
                .bind(&vendor.reliability)
                .bind(&vendor.price_competitiveness)
                .bind(&vendor.contact)
                .execute(&mut *tx)
                .await?
                .rows_affected();
        }
        tx.commit().await?;
        Ok(inserted)
    }

    /// Insert the built-in vendor list when the table is empty.
    ///
    /// Returns the number of rows inserted (zero when already populated).
    pub async fn seed_if_empty(pool: &PgPool) -> Result<u64, sqlx::Error> {
        if Self::count(pool).await? > 0 {
            return Ok(0);
        }
        let inserted = Self::insert_many(pool, &seed_vendors()).await?;
        tracing::info!(inserted, "Seeded vendor ratings");
        Ok(inserted)
    }
}
