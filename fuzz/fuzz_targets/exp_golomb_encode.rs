#![no_main]

use golomb::coding::exp_golomb;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &[u8]| {
    if input.len() < 9 {
        return;
    }
    let data = u64::from_le_bytes(input[0..8].try_into().unwrap());
    let k = u32::from(input[8]);

    let code = match exp_golomb::encode(data, k) {
        Ok(code) => code,
        Err(_) => return,
    };

    assert!(code.len <= 64);
    if code.len < 64 {
        assert_eq!(code.bits >> code.len, 0);
    }
    assert_eq!(code.to_bit_string().len(), code.len as usize);

    // The code word is the offset value itself; undo the offset and check
    // the closed-form length.
    let bit_len = 64 - code.bits.leading_zeros();
    assert_eq!(code.len, 2 * bit_len - k - 1);
    assert_eq!(code.bits - (1u64 << k), data);
});
