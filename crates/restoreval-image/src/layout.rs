use std::str::FromStr;

use crate::ImageError;

/// Axis order of a raw pixel array.
///
/// Parsing only accepts the literal strings `"HWC"` and `"CHW"`.
///
/// ```
/// use restoreval_image::InputOrder;
///
/// let order: InputOrder = "CHW".parse().unwrap();
/// assert_eq!(order, InputOrder::Chw);
/// assert!("WHC".parse::<InputOrder>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum InputOrder {
    /// Height x Width x Channel.
    #[default]
    Hwc,
    /// Channel x Height x Width.
    Chw,
}

impl InputOrder {
    /// The canonical string form of the order.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputOrder::Hwc => "HWC",
            InputOrder::Chw => "CHW",
        }
    }

    /// Returns the permutation that brings an array in this order to HWC.
    pub fn to_hwc_axes(&self) -> [usize; 3] {
        match self {
            InputOrder::Hwc => [0, 1, 2],
            InputOrder::Chw => [1, 2, 0],
        }
    }
}

impl FromStr for InputOrder {
    type Err = ImageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HWC" => Ok(InputOrder::Hwc),
            "CHW" => Ok(InputOrder::Chw),
            other => Err(ImageError::InvalidInputOrder(other.to_string())),
        }
    }
}

impl TryFrom<String> for InputOrder {
    type Error = ImageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<InputOrder> for String {
    fn from(order: InputOrder) -> Self {
        order.as_str().to_string()
    }
}

impl std::fmt::Display for InputOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
