mod codec;
mod fs_channel;
mod record;

pub use codec::{
    DecodedBoard, EncodedBoard, decode_board, encode_board, export_filename, strip_control_markup,
};
pub use fs_channel::FsFileChannel;
pub use record::{BoardDocument, ItemRecord, RecordPayload};
