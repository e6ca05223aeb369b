use serde::Deserialize;

use super::TileGrid;

/// JSON level layout: `{ "cellWidth": 16, "cellHeight": 16, "tiles": ["....", "####"] }`
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelBundle {
    pub cell_width: f64,
    pub cell_height: f64,
    pub tiles: Vec<String>,
}

impl LevelBundle {
    pub fn into_grid(self) -> Result<TileGrid, String> {
        TileGrid::from_rows(&self.tiles[..], self.cell_width, self.cell_height)
    }
}
