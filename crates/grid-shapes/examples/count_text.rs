use grid_shapes::{Connectivity, CountConfig, count_shapes, label_shapes, parse_grid};

fn main() {
    let text = "110\n010\n001\n";
    let grid = parse_grid(text).expect("valid grid text");

    let every = CountConfig::default();
    let multi_cell_only = CountConfig {
        include_singletons: false,
        ..CountConfig::default()
    };

    println!("shapes: {}", count_shapes(&grid, &every));
    println!(
        "shapes with two or more cells: {}",
        count_shapes(&grid, &multi_cell_only)
    );

    let map = label_shapes(&grid, Connectivity::C4);
    for y in 0..map.height() {
        let row: Vec<String> = (0..map.width())
            .map(|x| map.get(x, y).expect("in bounds").to_string())
            .collect();
        println!("{}", row.join(""));
    }
}
