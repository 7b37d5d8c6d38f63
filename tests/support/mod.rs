#![allow(dead_code)]

use radframe::record::TargetRecord;

/// Encode a target in its 29-byte big-endian layout.
pub fn encode(t: &TargetRecord) -> Vec<u8> {
    let mut r = Vec::with_capacity(29);
    r.push(t.goal_numbering);
    r.extend(t.vertical_distance.to_be_bytes());
    r.extend(t.lateral_distance.to_be_bytes());
    r.extend(t.speed_y.to_be_bytes());
    r.extend(t.target_type.to_be_bytes());
    r.extend(t.lane_number.to_be_bytes());
    r.extend(t.front_spacing.to_be_bytes());
    r.extend(t.front_time_interval.to_be_bytes());
    r.extend(t.speed_x.to_be_bytes());
    r.extend(t.angle.to_be_bytes());
    r.push(t.incidents);
    r.extend(t.radar_network_x.to_be_bytes());
    r.extend(t.radar_network_y.to_be_bytes());
    r.push(t.fill_the_blind_mark);
    r.push(t.car_length);
    r.push(t.car_width);
    r
}

/// Encode a module: tag, big-endian length including the header, payload.
pub fn module(tag: &[u8; 2], payload: &[u8]) -> Vec<u8> {
    let mut r = tag.to_vec();
    r.extend((payload.len() as u16 + 4).to_be_bytes());
    r.extend(payload);
    r
}

/// Encode a frame with an explicit total size.
pub fn frame_with_total(total: u16, modules: &[Vec<u8>]) -> Vec<u8> {
    let mut r = vec![0xAB, 0xCD];
    r.extend(total.to_be_bytes());
    modules.iter().for_each(|m| r.extend(m));
    r
}

/// Encode a frame whose total size covers its size field and every module.
pub fn frame(modules: &[Vec<u8>]) -> Vec<u8> {
    let total = 2 + modules.iter().map(Vec::len).sum::<usize>();
    frame_with_total(total as u16, modules)
}
