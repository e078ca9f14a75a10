use clap::Parser;

use relation_matrix::cli::Args;
use relation_matrix::schema_with_relation;

fn main() {
    let args = Args::parse();
    let bundle = schema_with_relation(args.on_parent, args.on_child, args.mode);
    let variants = bundle.family(args.family);

    for (index, variant) in variants.iter().enumerate() {
        println!(
            "--- variant {index} (parent selector: {}, child selector: {}) ---",
            variant.parent.label(),
            variant.child.label()
        );
        println!("{}", variant.datamodel);
        println!();
    }
    println!("{} variants", variants.len());
}
