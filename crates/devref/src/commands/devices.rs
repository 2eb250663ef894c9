//! `devref devices <category>`

use devref_core::{DeviceRecord, DeviceService, Label};

use crate::cli::{DevicesArgs, GlobalOpts, OutputFormat};
use crate::config::Session;
use crate::error::CliError;
use crate::output;

fn cells(d: &DeviceRecord) -> Vec<String> {
    vec![
        d.id.to_string(),
        d.code.clone().unwrap_or_default(),
        d.name.clone().unwrap_or_default(),
        d.description.clone().unwrap_or_default(),
    ]
}

pub async fn handle(session: Session, args: DevicesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let Session { service, mut state } = session;
    let service = DeviceService::new(&service)?;

    super::select_category(&service, &mut state, &args.category).await?;
    super::load_devices(&service, &mut state).await?;

    let rendered = output::render_list(
        global.output,
        state.devices(),
        &[
            state.label(Label::Id),
            state.label(Label::Designation),
            state.label(Label::Name),
            state.label(Label::Description),
        ],
        cells,
        |d| d.id.to_string(),
    )?;

    if global.output == OutputFormat::Table && !global.quiet {
        if let Some(category) = state.selected_category() {
            let title = format!("{}: {}", state.label(Label::Devices), category.display_name);
            output::print_output(&output::heading(&title, output::should_color(global.color)), false);
        }
    }
    output::print_output(&rendered, global.quiet);
    Ok(())
}
