use odegallery::*;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let id = std::env::args().nth(1).unwrap_or_else(|| "sir".to_string());

    let model = list_models()
        .into_iter()
        .find(|m| m.id == id)
        .ok_or_else(|| anyhow::anyhow!("unknown model '{}', try one of {:?}", id, ids()))?;

    println!("{} ({})", model.display_name, model.equation_text);
    println!("{}", model.description);
    println!();

    let trajectory = generate_trajectory(&id)?;

    print!("{:>8}", model.axis_labels.x);
    for field in &model.output_fields {
        print!("\t{:>12}", field.label);
    }
    println!();

    for point in &trajectory {
        print!("{:>8}", point.time());
        for value in point.values() {
            print!("\t{:>12.4}", value);
        }
        println!();
    }

    println!();
    println!("{}", snippet(&id)?);
    Ok(())
}

fn ids() -> Vec<String> {
    list_models().into_iter().map(|m| m.id).collect()
}
