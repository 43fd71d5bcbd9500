use crate::app::AppContext;
use crate::domain::{AppError, Datasets, resolve};
use crate::ports::TableSource;

/// Join the person's records and render the prompt that would be sent.
pub fn execute<S: TableSource>(
    ctx: &AppContext<S>,
    datasets: &Datasets,
    person: &str,
    instructions: &str,
) -> Result<String, AppError> {
    let record = resolve(person, datasets)?;
    let template = ctx.prompt_template()?;
    Ok(template.render(&record, instructions)?)
}
