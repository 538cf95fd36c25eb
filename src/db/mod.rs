//! Database Connection Management Module
//!
//! MongoDB 연결을 관리합니다. 연결 정보는 [`StorageConfig`]에서 읽습니다.
//!
//! ```rust,ignore
//! use crate::db::Database;
//! use crate::repositories::MongoQuizRepository;
//!
//! let database = Database::new().await?;
//! let repository = MongoQuizRepository::new(&database);
//! repository.create_indexes().await?;
//! ```

use mongodb::{Client, options::ClientOptions};
use log::info;
use crate::config::StorageConfig;

/// MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 환경 변수 설정으로 연결합니다.
    ///
    /// - `MONGODB_URI`: 기본값 "mongodb://localhost:27017"
    /// - `DATABASE_NAME`: 기본값 "quiz"
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        Self::connect(&StorageConfig::mongodb_uri(), &StorageConfig::database_name()).await
    }

    /// 주어진 URI로 연결하고 `ping`으로 연결 상태를 확인합니다.
    pub async fn connect(uri: &str, database_name: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let mut client_options = ClientOptions::parse(uri).await?;
        client_options.app_name = Some("quiz_service".to_string());
        client_options.server_selection_timeout = Some(StorageConfig::timeout());

        let client = Client::with_options(client_options)?;

        client
            .database(database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }
}
