//! # Block Type Module
//!
//! This module defines the different types of blocks in the voxel world.
//! It provides block type identification, conversion from the compact storage
//! format, name lookup and the classification queries used by the safe
//! location search.

use std::{fmt, str::FromStr};

use num_derive::FromPrimitive;
use serde::{Deserialize, Serialize};

use super::BlockTypeSize;

/// Enumerates all possible block types in the voxel world.
///
/// Each variant represents a distinct type of block with its own properties
/// and behavior. The `FromPrimitive` derive allows conversion from integers,
/// which is how chunks store block data.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, FromPrimitive, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[allow(non_camel_case_types)]
pub enum BlockType {
    /// An air block, which is non-solid and transparent.
    #[default]
    AIR,

    /// A basic dirt block, used as a common building material.
    DIRT,

    /// A grass block with different textures on top and sides.
    GRASS,

    /// A wooden block with a bark texture on all sides.
    WOOD,

    /// A plain white block, often used for testing.
    WHITE,

    /// Natural stone.
    STONE,

    /// Water. Non-solid, and not a hazard for the safe location search.
    WATER,

    /// Decorative plant that does not fill its voxel.
    TALL_GRASS,

    /// A still lava source.
    LAVA,

    /// Lava that is spreading from a source.
    FLOWING_LAVA,

    /// Fire burning on top of another block.
    FIRE,
}

/// Every accepted block name, including namespaced aliases.
static BLOCK_NAMES: phf::Map<&'static str, BlockType> = phf::phf_map! {
    "air" => BlockType::AIR,
    "minecraft:air" => BlockType::AIR,
    "dirt" => BlockType::DIRT,
    "minecraft:dirt" => BlockType::DIRT,
    "grass" => BlockType::GRASS,
    "minecraft:grass" => BlockType::GRASS,
    "wood" => BlockType::WOOD,
    "log" => BlockType::WOOD,
    "minecraft:log" => BlockType::WOOD,
    "white" => BlockType::WHITE,
    "stone" => BlockType::STONE,
    "minecraft:stone" => BlockType::STONE,
    "water" => BlockType::WATER,
    "minecraft:water" => BlockType::WATER,
    "tall_grass" => BlockType::TALL_GRASS,
    "tallgrass" => BlockType::TALL_GRASS,
    "minecraft:tallgrass" => BlockType::TALL_GRASS,
    "lava" => BlockType::LAVA,
    "minecraft:lava" => BlockType::LAVA,
    "flowing_lava" => BlockType::FLOWING_LAVA,
    "minecraft:flowing_lava" => BlockType::FLOWING_LAVA,
    "fire" => BlockType::FIRE,
    "minecraft:fire" => BlockType::FIRE,
};

impl BlockType {
    /// Converts a `BlockTypeSize` to a `BlockType`.
    ///
    /// This is used when converting from the compact chunk storage format
    /// back to the rich enum type. Unknown values read as `AIR`.
    pub fn get_block_type_from_int(btype: BlockTypeSize) -> Self {
        num::FromPrimitive::from_u8(btype).unwrap_or(BlockType::AIR)
    }

    /// Looks up a block type by name, case-insensitively.
    ///
    /// Accepts both bare names (`"lava"`) and namespaced ids (`"minecraft:lava"`).
    pub fn from_name(name: &str) -> Option<Self> {
        BLOCK_NAMES.get(name.trim().to_ascii_lowercase().as_str()).copied()
    }

    /// The canonical name used when writing a block type back out.
    pub fn name(self) -> &'static str {
        match self {
            BlockType::AIR => "air",
            BlockType::DIRT => "dirt",
            BlockType::GRASS => "grass",
            BlockType::WOOD => "wood",
            BlockType::WHITE => "white",
            BlockType::STONE => "stone",
            BlockType::WATER => "water",
            BlockType::TALL_GRASS => "tall_grass",
            BlockType::LAVA => "lava",
            BlockType::FLOWING_LAVA => "flowing_lava",
            BlockType::FIRE => "fire",
        }
    }

    /// Whether the block fully occupies its voxel.
    pub fn is_solid_cube(self) -> bool {
        matches!(
            self,
            BlockType::DIRT | BlockType::GRASS | BlockType::WOOD | BlockType::WHITE | BlockType::STONE
        )
    }

    /// Whether the voxel is empty.
    pub fn is_air(self) -> bool {
        self == BlockType::AIR
    }

    /// Still or flowing lava.
    pub fn is_lava(self) -> bool {
        matches!(self, BlockType::LAVA | BlockType::FLOWING_LAVA)
    }

    /// Whether the block is fire.
    pub fn is_fire(self) -> bool {
        self == BlockType::FIRE
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a block name is not in the block registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBlockName(pub String);

impl fmt::Display for UnknownBlockName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown block name: {}", self.0)
    }
}

impl std::error::Error for UnknownBlockName {}

impl FromStr for BlockType {
    type Err = UnknownBlockName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockType::from_name(s).ok_or_else(|| UnknownBlockName(s.to_string()))
    }
}

impl TryFrom<String> for BlockType {
    type Error = UnknownBlockName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BlockType> for String {
    fn from(value: BlockType) -> Self {
        value.name().to_string()
    }
}
