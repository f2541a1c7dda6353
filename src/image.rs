//! Image format descriptions.

use crate::cl::*;

/// The ordering of channels within an image pixel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ChannelOrder {
    R = CL_R,
    A = CL_A,
    RG = CL_RG,
    RA = CL_RA,
    RGB = CL_RGB,
    RGBA = CL_RGBA,
    BGRA = CL_BGRA,
    ARGB = CL_ARGB,
    Intensity = CL_INTENSITY,
    Luminance = CL_LUMINANCE,
    Rx = CL_Rx,
    RGx = CL_RGx,
    RGBx = CL_RGBx,
}

impl ChannelOrder {
    pub fn from_raw(raw: cl_channel_order) -> Option<ChannelOrder> {
        Some(match raw {
            CL_R => ChannelOrder::R,
            CL_A => ChannelOrder::A,
            CL_RG => ChannelOrder::RG,
            CL_RA => ChannelOrder::RA,
            CL_RGB => ChannelOrder::RGB,
            CL_RGBA => ChannelOrder::RGBA,
            CL_BGRA => ChannelOrder::BGRA,
            CL_ARGB => ChannelOrder::ARGB,
            CL_INTENSITY => ChannelOrder::Intensity,
            CL_LUMINANCE => ChannelOrder::Luminance,
            CL_Rx => ChannelOrder::Rx,
            CL_RGx => ChannelOrder::RGx,
            CL_RGBx => ChannelOrder::RGBx,
            _ => return None,
        })
    }
}

/// The data type of each image channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ChannelDataType {
    SnormInt8 = CL_SNORM_INT8,
    SnormInt16 = CL_SNORM_INT16,
    UnormInt8 = CL_UNORM_INT8,
    UnormInt16 = CL_UNORM_INT16,
    UnormShort565 = CL_UNORM_SHORT_565,
    UnormShort555 = CL_UNORM_SHORT_555,
    UnormInt101010 = CL_UNORM_INT_101010,
    SignedInt8 = CL_SIGNED_INT8,
    SignedInt16 = CL_SIGNED_INT16,
    SignedInt32 = CL_SIGNED_INT32,
    UnsignedInt8 = CL_UNSIGNED_INT8,
    UnsignedInt16 = CL_UNSIGNED_INT16,
    UnsignedInt32 = CL_UNSIGNED_INT32,
    HalfFloat = CL_HALF_FLOAT,
    Float = CL_FLOAT,
}

impl ChannelDataType {
    pub fn from_raw(raw: cl_channel_type) -> Option<ChannelDataType> {
        Some(match raw {
            CL_SNORM_INT8 => ChannelDataType::SnormInt8,
            CL_SNORM_INT16 => ChannelDataType::SnormInt16,
            CL_UNORM_INT8 => ChannelDataType::UnormInt8,
            CL_UNORM_INT16 => ChannelDataType::UnormInt16,
            CL_UNORM_SHORT_565 => ChannelDataType::UnormShort565,
            CL_UNORM_SHORT_555 => ChannelDataType::UnormShort555,
            CL_UNORM_INT_101010 => ChannelDataType::UnormInt101010,
            CL_SIGNED_INT8 => ChannelDataType::SignedInt8,
            CL_SIGNED_INT16 => ChannelDataType::SignedInt16,
            CL_SIGNED_INT32 => ChannelDataType::SignedInt32,
            CL_UNSIGNED_INT8 => ChannelDataType::UnsignedInt8,
            CL_UNSIGNED_INT16 => ChannelDataType::UnsignedInt16,
            CL_UNSIGNED_INT32 => ChannelDataType::UnsignedInt32,
            CL_HALF_FLOAT => ChannelDataType::HalfFloat,
            CL_FLOAT => ChannelDataType::Float,
            _ => return None,
        })
    }
}

/// The kind of memory object a format query applies to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum MemObjectType {
    Buffer = CL_MEM_OBJECT_BUFFER,
    Image2D = CL_MEM_OBJECT_IMAGE2D,
    Image3D = CL_MEM_OBJECT_IMAGE3D,
}

/// An image format pair, mirroring `cl_image_format`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ImageFormat {
    pub channel_order: ChannelOrder,
    pub channel_data_type: ChannelDataType,
}

impl ImageFormat {
    pub fn new(channel_order: ChannelOrder, channel_data_type: ChannelDataType) -> ImageFormat {
        ImageFormat {
            channel_order,
            channel_data_type,
        }
    }

    pub fn to_raw(self) -> cl_image_format {
        cl_image_format {
            image_channel_order: self.channel_order as cl_channel_order,
            image_channel_data_type: self.channel_data_type as cl_channel_type,
        }
    }

    /// Returns `None` for vendor-specific orders or types we do not model.
    pub fn from_raw(raw: cl_image_format) -> Option<ImageFormat> {
        Some(ImageFormat {
            channel_order: ChannelOrder::from_raw(raw.image_channel_order)?,
            channel_data_type: ChannelDataType::from_raw(raw.image_channel_data_type)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_raw_roundtrip() {
        let fmt = ImageFormat::new(ChannelOrder::RGBA, ChannelDataType::UnormInt8);
        let raw = fmt.to_raw();
        assert_eq!(raw.image_channel_order, CL_RGBA);
        assert_eq!(raw.image_channel_data_type, CL_UNORM_INT8);
        assert_eq!(ImageFormat::from_raw(raw), Some(fmt));
    }

    #[test]
    fn unknown_format_rejected() {
        let raw = cl_image_format {
            image_channel_order: 0xFFFF,
            image_channel_data_type: CL_FLOAT,
        };
        assert_eq!(ImageFormat::from_raw(raw), None);
    }
}
