//! clean-env: write a clean local `.env` file for the Stripe and Calendly
//! integration.

use anyhow::Result;

fn main() -> Result<()> {
    clean_env::cli::run()
}
