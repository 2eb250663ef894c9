//! `devref properties <category> <id>`

use devref_core::{DeviceService, Label};

use crate::cli::{GlobalOpts, OutputFormat, PropertiesArgs};
use crate::config::Session;
use crate::error::CliError;
use crate::output;

pub async fn handle(
    session: Session,
    args: PropertiesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let Session { service, mut state } = session;
    let service = DeviceService::new(&service)?;

    super::select_category(&service, &mut state, &args.category).await?;
    super::load_devices(&service, &mut state).await?;
    state.select_device_id(args.id)?;
    let rows = state.require_selected_properties()?;

    let rendered = output::render_list(
        global.output,
        &rows,
        &[state.label(Label::Property), state.label(Label::Value)],
        |r| vec![r.property_name.clone(), r.value.to_string()],
        |r| format!("{}\t{}", r.property_name, r.value),
    )?;

    if global.output == OutputFormat::Table && !global.quiet {
        if let Some(device) = state.selected_device() {
            let name = device.name.as_deref().unwrap_or_default();
            let title = format!("{}: {} ({})", state.label(Label::Properties), name, device.id);
            output::print_output(&output::heading(&title, output::should_color(global.color)), false);
        }
    }
    output::print_output(&rendered, global.quiet);
    Ok(())
}
