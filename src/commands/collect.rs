//! The collection pipeline: templates, food index, nutrition details, output files.

use std::time::Instant;

use clap::Args;
use thiserror::Error;

use crate::bedca::{BedcaClient, BedcaError};
use crate::config::Config;
use crate::models::NutritionRecord;
use crate::template::{RequestTemplate, TemplateError};
use crate::writer::{OutputFiles, WriteError};

#[derive(Error, Debug)]
pub enum CollectError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Bedca(#[from] BedcaError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Fetch every food's nutrition facts and write the output files
#[derive(Args, Default)]
pub struct CollectCommand {}

impl CollectCommand {
    pub async fn run(&self, config: &Config) -> Result<(), CollectError> {
        tracing::info!("Started");
        let start = Instant::now();

        let client = BedcaClient::new(config.base_url.value.clone());
        tracing::debug!("Querying {}", client.base_url());
        let records = read_data(&client, config).await?;

        let outputs = OutputFiles {
            json_path: config.json_output.value.clone(),
            csv_path: config.csv_output.value.clone(),
            delimiter: config.delimiter.value,
        };
        outputs.write(&records)?;

        tracing::info!("Done! Elapsed: {:.1} s", start.elapsed().as_secs_f64());
        Ok(())
    }
}

/// Lists every food, then fetches details one food at a time.
///
/// Foods whose detail response has no name are left out.
async fn read_data(
    client: &BedcaClient,
    config: &Config,
) -> Result<Vec<NutritionRecord>, CollectError> {
    tracing::info!("Reading request body templates");
    let list_template = RequestTemplate::load(&config.list_template.value)?;
    let detail_template = RequestTemplate::load(&config.detail_template.value)?;

    let foods = client.list_foods(&list_template).await?;
    tracing::info!("Found {} food(s)", foods.len());

    let mut records = Vec::with_capacity(foods.len());
    for food in &foods {
        if let Some(record) = client.get_nutrition_facts(&detail_template, food).await? {
            records.push(record);
        }
    }

    Ok(records)
}
