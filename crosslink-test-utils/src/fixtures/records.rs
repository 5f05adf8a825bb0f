//! Row insertion into the test database.
//!
//! Inserting a match creates its home & away teams when they do not exist yet, so tests can
//! declare fixtures without worrying about foreign keys.

use sea_orm::{EntityTrait, IntoActiveModel};

use crate::{
    error::TestError,
    fixtures::{factory, RecordFixtures},
};

impl<'a> RecordFixtures<'a> {
    pub async fn insert_person(
        &self,
        person: entity::people::Model,
    ) -> Result<entity::people::Model, TestError> {
        Ok(entity::prelude::People::insert(person.into_active_model())
            .exec_with_returning(&self.setup.db)
            .await?)
    }

    /// Insert a mock player row
    pub async fn insert_mock_person(
        &self,
        id: &str,
        sanity_id: Option<&str>,
    ) -> Result<entity::people::Model, TestError> {
        self.insert_person(factory::mock_person(id, sanity_id)).await
    }

    /// Insert a mock member of staff, a row without a player position
    pub async fn insert_mock_staff(
        &self,
        id: &str,
        sanity_id: Option<&str>,
    ) -> Result<entity::people::Model, TestError> {
        self.insert_person(factory::mock_staff(id, sanity_id)).await
    }

    /// Insert a mock team, returning the existing row if the id is already taken
    pub async fn insert_mock_team(
        &self,
        id: &str,
        name: &str,
        sanity_id: Option<&str>,
    ) -> Result<entity::teams::Model, TestError> {
        if let Some(existing) = entity::prelude::Teams::find_by_id(id.to_string())
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        Ok(entity::prelude::Teams::insert(
            factory::mock_team(id, name, sanity_id).into_active_model(),
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a mock match, creating missing home & away teams first
    pub async fn insert_mock_match(
        &self,
        id: &str,
        home_team_id: Option<&str>,
        away_team_id: Option<&str>,
        sanity_id: Option<&str>,
    ) -> Result<entity::matches::Model, TestError> {
        for team_id in [home_team_id, away_team_id].into_iter().flatten() {
            self.insert_mock_team(team_id, &format!("Team {}", team_id), None)
                .await?;
        }

        Ok(entity::prelude::Match::insert(
            factory::mock_match(id, home_team_id, away_team_id, sanity_id).into_active_model(),
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_mock_sponsor(
        &self,
        id: &str,
        featured: bool,
        sanity_id: Option<&str>,
    ) -> Result<entity::sponsors::Model, TestError> {
        Ok(entity::prelude::Sponsors::insert(
            factory::mock_sponsor(id, featured, sanity_id).into_active_model(),
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
