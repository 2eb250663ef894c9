//! `devref categories`

use devref_core::{DeviceService, Label};

use crate::cli::GlobalOpts;
use crate::config::Session;
use crate::error::CliError;
use crate::output;

pub async fn handle(session: Session, global: &GlobalOpts) -> Result<(), CliError> {
    let Session { service, mut state } = session;
    let service = DeviceService::new(&service)?;

    super::load_categories(&service, &mut state).await?;

    let rendered = output::render_list(
        global.output,
        state.categories(),
        &[state.label(Label::Id), state.label(Label::DeviceType)],
        |c| vec![c.key.clone(), c.display_name.clone()],
        |c| c.key.clone(),
    )?;
    output::print_output(&rendered, global.quiet);
    Ok(())
}
