pub mod gcs_asset_store;
