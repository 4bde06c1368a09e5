//! Postgres-backed player repository

use crate::repository::PlayerRepository;
use crate::types::{
    Achievements, CareerStats, Player, PlayerId, RegistryError, RegistryResult,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS players (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        team TEXT NOT NULL,
        position TEXT,
        jersey_number TEXT,
        year_start INTEGER,
        year_end INTEGER
    )",
    "CREATE TABLE IF NOT EXISTS career_stats (
        player_id INTEGER PRIMARY KEY REFERENCES players(id),
        ppg DOUBLE PRECISION NOT NULL,
        rpg DOUBLE PRECISION NOT NULL,
        apg DOUBLE PRECISION NOT NULL,
        spg DOUBLE PRECISION NOT NULL,
        bpg DOUBLE PRECISION NOT NULL,
        fgp DOUBLE PRECISION NOT NULL,
        tpp DOUBLE PRECISION NOT NULL,
        ftp DOUBLE PRECISION NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS achievements (
        player_id INTEGER PRIMARY KEY REFERENCES players(id),
        championships INTEGER NOT NULL DEFAULT 0,
        mvps INTEGER NOT NULL DEFAULT 0,
        all_star INTEGER NOT NULL DEFAULT 0,
        all_nba INTEGER NOT NULL DEFAULT 0,
        all_defense INTEGER NOT NULL DEFAULT 0,
        scoring_titles INTEGER NOT NULL DEFAULT 0,
        dpoy INTEGER NOT NULL DEFAULT 0
    )",
];

const PLAYER_COLUMNS: &str = "id, name, team, position, jersey_number, year_start, year_end";

#[derive(sqlx::FromRow)]
struct PlayerRow {
    id: i32,
    name: String,
    team: String,
    position: Option<String>,
    jersey_number: Option<String>,
    year_start: Option<i32>,
    year_end: Option<i32>,
}

impl From<PlayerRow> for Player {
    fn from(row: PlayerRow) -> Self {
        Self {
            id: PlayerId::from(row.id),
            name: row.name,
            team: row.team,
            position: row.position,
            jersey_number: row.jersey_number,
            year_start: row.year_start,
            year_end: row.year_end,
        }
    }
}

#[derive(sqlx::FromRow)]
struct StatsRow {
    ppg: f64,
    rpg: f64,
    apg: f64,
    spg: f64,
    bpg: f64,
    fgp: f64,
    tpp: f64,
    ftp: f64,
}

impl From<StatsRow> for CareerStats {
    fn from(row: StatsRow) -> Self {
        Self {
            ppg: row.ppg,
            rpg: row.rpg,
            apg: row.apg,
            spg: row.spg,
            bpg: row.bpg,
            fgp: row.fgp,
            tpp: row.tpp,
            ftp: row.ftp,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AchievementsRow {
    championships: i32,
    mvps: i32,
    all_star: i32,
    all_nba: i32,
    all_defense: i32,
    scoring_titles: i32,
    dpoy: i32,
}

impl From<AchievementsRow> for Achievements {
    fn from(row: AchievementsRow) -> Self {
        // Negative counts are treated as zero
        let count = |value: i32| value.max(0) as u32;
        Self {
            championships: count(row.championships),
            mvps: count(row.mvps),
            all_star: count(row.all_star),
            all_nba: count(row.all_nba),
            all_defense: count(row.all_defense),
            scoring_titles: count(row.scoring_titles),
            dpoy: count(row.dpoy),
        }
    }
}

/// Player repository reading from Postgres tables `players`, `career_stats`
/// and `achievements`
pub struct PgPlayerRepository {
    pool: PgPool,
}

impl PgPlayerRepository {
    /// Wrap an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` and make sure the tables exist
    pub async fn connect(database_url: &str, max_connections: u32) -> RegistryResult<Self> {
        let pool =
            PgPoolOptions::new().max_connections(max_connections).connect(database_url).await?;
        info!("Connected to database");

        let repository = Self::new(pool);
        repository.ensure_schema().await?;
        Ok(repository)
    }

    /// Create the tables if they are missing
    pub async fn ensure_schema(&self) -> RegistryResult<()> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }
}

/// Column value for `id`; `None` when no `INTEGER` row can carry it
fn to_db_id(id: PlayerId) -> Option<i32> {
    i32::try_from(id).ok()
}

#[async_trait::async_trait]
impl PlayerRepository for PgPlayerRepository {
    async fn search(&self, query: &str) -> RegistryResult<Vec<Player>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(RegistryError::InvalidInput("Search query is required".to_string()));
        }

        let rows = sqlx::query_as::<_, PlayerRow>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players \
             WHERE strpos(lower(name), lower($1)) > 0 OR strpos(lower(team), lower($1)) > 0 \
             ORDER BY id"
        ))
        .bind(query)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Player::from).collect())
    }

    async fn list_players(&self) -> RegistryResult<Vec<Player>> {
        let rows =
            sqlx::query_as::<_, PlayerRow>(&format!("SELECT {PLAYER_COLUMNS} FROM players ORDER BY id"))
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(Player::from).collect())
    }

    async fn get_by_id(&self, id: PlayerId) -> RegistryResult<Player> {
        let db_id = to_db_id(id).ok_or(RegistryError::PlayerNotFound(id))?;
        sqlx::query_as::<_, PlayerRow>(&format!("SELECT {PLAYER_COLUMNS} FROM players WHERE id = $1"))
            .bind(db_id)
            .fetch_optional(&self.pool)
            .await?
            .map(Player::from)
            .ok_or(RegistryError::PlayerNotFound(id))
    }

    async fn get_stats(&self, id: PlayerId) -> RegistryResult<CareerStats> {
        let db_id = to_db_id(id).ok_or(RegistryError::StatsNotFound(id))?;
        sqlx::query_as::<_, StatsRow>(
            "SELECT ppg, rpg, apg, spg, bpg, fgp, tpp, ftp FROM career_stats WHERE player_id = $1",
        )
        .bind(db_id)
        .fetch_optional(&self.pool)
        .await?
        .map(CareerStats::from)
        .ok_or(RegistryError::StatsNotFound(id))
    }

    async fn get_achievements(&self, id: PlayerId) -> RegistryResult<Achievements> {
        let db_id = to_db_id(id).ok_or(RegistryError::AchievementsNotFound(id))?;
        sqlx::query_as::<_, AchievementsRow>(
            "SELECT championships, mvps, all_star, all_nba, all_defense, scoring_titles, dpoy \
             FROM achievements WHERE player_id = $1",
        )
        .bind(db_id)
        .fetch_optional(&self.pool)
        .await?
        .map(Achievements::from)
        .ok_or(RegistryError::AchievementsNotFound(id))
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
