//! Minimal JPEG fixtures carrying an EXIF block, built byte by byte.

const TAG_ORIENTATION: u16 = 0x0112;
const TAG_DATETIME: u16 = 0x0132;
const TAG_EXIF_IFD_POINTER: u16 = 0x8769;
const TAG_OFFSET_TIME: u16 = 0x9010;

const TYPE_ASCII: u16 = 2;
const TYPE_SHORT: u16 = 3;
const TYPE_LONG: u16 = 4;

struct Entry {
    tag: u16,
    kind: u16,
    count: u32,
    data: Vec<u8>,
}

fn ascii(tag: u16, text: &str) -> Entry {
    let mut data = text.as_bytes().to_vec();
    data.push(0);
    Entry {
        tag,
        kind: TYPE_ASCII,
        count: data.len() as u32,
        data,
    }
}

fn ifd_len(entries: usize) -> u32 {
    2 + 12 * entries as u32 + 4
}

fn write_ifd(out: &mut Vec<u8>, entries: &[Entry], data_offset: &mut u32, data: &mut Vec<u8>) {
    out.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    for entry in entries {
        out.extend_from_slice(&entry.tag.to_le_bytes());
        out.extend_from_slice(&entry.kind.to_le_bytes());
        out.extend_from_slice(&entry.count.to_le_bytes());
        if entry.data.len() <= 4 {
            let mut inline = entry.data.clone();
            inline.resize(4, 0);
            out.extend_from_slice(&inline);
        } else {
            out.extend_from_slice(&data_offset.to_le_bytes());
            data.extend_from_slice(&entry.data);
            *data_offset += entry.data.len() as u32;
        }
    }
    out.extend_from_slice(&0u32.to_le_bytes());
}

/// Little-endian TIFF body with IFD0 `DateTime` and an optional Exif
/// sub-IFD holding `OffsetTime`.
pub(crate) fn tiff_with_datetime(datetime: Option<&str>, offset_time: Option<&str>) -> Vec<u8> {
    let mut ifd0 = vec![Entry {
        tag: TAG_ORIENTATION,
        kind: TYPE_SHORT,
        count: 1,
        data: 1u16.to_le_bytes().to_vec(),
    }];
    if let Some(datetime) = datetime {
        ifd0.push(ascii(TAG_DATETIME, datetime));
    }
    let exif_ifd: Vec<Entry> = offset_time
        .map(|offset| vec![ascii(TAG_OFFSET_TIME, offset)])
        .unwrap_or_default();

    let ifd0_offset = 8u32;
    let ifd0_count = ifd0.len() + usize::from(!exif_ifd.is_empty());
    let exif_offset = ifd0_offset + ifd_len(ifd0_count);
    if !exif_ifd.is_empty() {
        ifd0.push(Entry {
            tag: TAG_EXIF_IFD_POINTER,
            kind: TYPE_LONG,
            count: 1,
            data: exif_offset.to_le_bytes().to_vec(),
        });
    }
    let mut data_offset = if exif_ifd.is_empty() {
        exif_offset
    } else {
        exif_offset + ifd_len(exif_ifd.len())
    };

    let mut out = Vec::new();
    out.extend_from_slice(b"II");
    out.extend_from_slice(&42u16.to_le_bytes());
    out.extend_from_slice(&ifd0_offset.to_le_bytes());

    let mut data = Vec::new();
    write_ifd(&mut out, &ifd0, &mut data_offset, &mut data);
    if !exif_ifd.is_empty() {
        write_ifd(&mut out, &exif_ifd, &mut data_offset, &mut data);
    }
    out.extend_from_slice(&data);
    out
}

pub(crate) fn jpeg_with_datetime(datetime: Option<&str>, offset_time: Option<&str>) -> Vec<u8> {
    let tiff = tiff_with_datetime(datetime, offset_time);
    let segment_len = (2 + 6 + tiff.len()) as u16;

    let mut out = vec![0xFF, 0xD8, 0xFF, 0xE1];
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(&tiff);
    out.extend_from_slice(&[0xFF, 0xD9]);
    out
}

/// A JPEG stream with no APP1 segment at all.
pub(crate) fn jpeg_without_exif() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xD9]
}
