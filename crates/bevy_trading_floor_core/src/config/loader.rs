use bevy::{
    asset::{AssetLoader, LoadContext, io::Reader},
    reflect::TypePath,
};

use super::TradingFloorConfig;
use crate::errors::AssetLoaderError;

#[derive(Default, TypePath)]
pub struct TradingFloorConfigLoader;

impl AssetLoader for TradingFloorConfigLoader {
    type Asset = TradingFloorConfig;
    type Settings = ();
    type Error = AssetLoaderError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = vec![];
        reader.read_to_end(&mut bytes).await?;
        TradingFloorConfig::from_ron_bytes(&bytes)
    }

    fn extensions(&self) -> &[&str] {
        &["floor.ron"]
    }
}
