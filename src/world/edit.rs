//! Tile edits as issued by an authoring tool
//!
//! Text form, as accepted on the command line:
//!
//! ```text
//! base=water@3,4          set a terrain base
//! obstacle=treeBL@5,5     set an object layer
//! decoration=-@5,5        clear an object layer
//! remove@2,2              delete the cell from the grid
//! add@30,2                create an empty cell
//! ```

use std::str::FromStr;

use crate::io::error::{GridError, invalid_edit};
use crate::spatial::geometry::GridPosition;

/// What to do to the tile at an edit's position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    /// Set the terrain base
    SetBase(String),
    /// Set (`Some`) or clear (`None`) the decoration
    SetDecoration(Option<String>),
    /// Set or clear the breakable
    SetBreakable(Option<String>),
    /// Set or clear the obstacle
    SetObstacle(Option<String>),
    /// Create an empty tile, replacing any tile already there
    Add,
    /// Delete the tile
    Remove,
}

/// A single edit applied between frames
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileEdit {
    /// Cell the edit targets
    pub position: GridPosition,
    /// Change to make
    pub action: EditAction,
}

impl FromStr for TileEdit {
    type Err = GridError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (target, coordinates) = input
            .rsplit_once('@')
            .ok_or_else(|| invalid_edit(&input, &"expected '@x,y' after the layer"))?;
        let position = parse_position(input, coordinates)?;

        let action = match target.split_once('=') {
            None => match target {
                "add" => EditAction::Add,
                "remove" => EditAction::Remove,
                _ => return Err(invalid_edit(&input, &"expected 'layer=name', 'add' or 'remove'")),
            },
            Some((layer, name)) => {
                if name.is_empty() {
                    return Err(invalid_edit(&input, &"sprite name is empty"));
                }
                let name = (name != "-").then(|| name.to_string());
                match layer {
                    "base" => EditAction::SetBase(
                        name.ok_or_else(|| invalid_edit(&input, &"the base layer cannot be cleared"))?,
                    ),
                    "decoration" => EditAction::SetDecoration(name),
                    "breakable" => EditAction::SetBreakable(name),
                    "obstacle" => EditAction::SetObstacle(name),
                    _ => return Err(invalid_edit(&input, &format!("unknown layer '{layer}'"))),
                }
            }
        };

        Ok(Self { position, action })
    }
}

fn parse_position(input: &str, coordinates: &str) -> Result<GridPosition, GridError> {
    let (x, y) = coordinates
        .split_once(',')
        .ok_or_else(|| invalid_edit(&input, &"coordinates must be 'x,y'"))?;
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|e| invalid_edit(&input, &format!("bad x coordinate: {e}")))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|e| invalid_edit(&input, &format!("bad y coordinate: {e}")))?;
    Ok(GridPosition::new(x, y))
}
