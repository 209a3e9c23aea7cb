//! Database lifecycle command handlers

use crate::config::Config;
use crate::db::Store;

async fn open(config: &Config) -> anyhow::Result<Store> {
    Store::with_pool_options(
        &config.general.database_url,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await
}

pub async fn cmd_db_create(config: &Config) -> anyhow::Result<()> {
    // Connecting applies the migrations.
    open(config).await?;
    println!("Database created successfully");
    Ok(())
}

pub async fn cmd_db_drop(config: &Config) -> anyhow::Result<()> {
    let store = open(config).await?;
    store.drop_all().await?;
    println!("Database dropped successfully");
    Ok(())
}

pub async fn cmd_db_seed(config: &Config) -> anyhow::Result<()> {
    let store = open(config).await?;
    let report = store.seed().await?;

    println!(
        "Database seeded successfully ({} planets, {} users added)",
        report.planets, report.users
    );
    Ok(())
}
