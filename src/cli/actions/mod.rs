pub mod get;
pub mod list;

// Internal "interpreter" for `Action`.
mod run;

use crate::cli::globals::GlobalArgs;

#[derive(Debug)]
pub enum Action {
    Get(get::Args),
    List(list::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self, globals: &GlobalArgs) -> anyhow::Result<()> {
        run::execute(self, globals).await
    }
}
