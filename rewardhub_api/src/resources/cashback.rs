//! Operations for cashback programs and earned cashback credits.

use crate::{
    types::{Cashback, CashbackProgram, CashbackProgramCreate, CashbackProgramUpdate, Page},
    CashbackQuery, Client, Error, ListQuery,
};

impl Client {
    /// Fetches the cashback programs a company runs.
    pub async fn list_cashback_programs(
        &self,
        company_id: &str,
    ) -> Result<Vec<CashbackProgram>, Error> {
        self.get::<Vec<CashbackProgram>, ListQuery>(
            format!("/cashback/programs/company/{}", company_id).as_str(),
            None,
        )
        .await
    }

    /// Creates a cashback program for the current company.
    pub async fn create_cashback_program(
        &self,
        payload: &CashbackProgramCreate,
    ) -> Result<CashbackProgram, Error> {
        self.post("/cashback/programs", payload).await
    }

    /// Applies a partial update; omitted fields are left untouched server-side.
    pub async fn update_cashback_program(
        &self,
        program_id: &str,
        payload: &CashbackProgramUpdate,
    ) -> Result<CashbackProgram, Error> {
        self.patch(
            format!("/cashback/programs/{}", program_id).as_str(),
            Some(payload),
        )
        .await
    }

    /// Deletes a cashback program.
    pub async fn delete_cashback_program(&self, program_id: &str) -> Result<(), Error> {
        self.delete(format!("/cashback/programs/{}", program_id).as_str())
            .await
    }

    /// Fetches a page of the current user's earned cashback credits.
    pub async fn list_cashbacks(&self, query: &CashbackQuery) -> Result<Page<Cashback>, Error> {
        self.get::<Page<Cashback>, CashbackQuery>("/cashback", Some(query))
            .await
    }
}
