use crate::domain::model::City;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn cities_path(&self) -> &str;
    fn max_results(&self) -> Option<usize>;
}

#[async_trait]
pub trait CitySource: Send + Sync {
    async fn load(&self) -> Result<Vec<City>>;
}
