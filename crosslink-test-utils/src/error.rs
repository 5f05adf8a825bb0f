use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    CmsError(#[from] sanity_client::Error),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
