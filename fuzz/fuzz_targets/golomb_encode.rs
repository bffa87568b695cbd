#![no_main]

use golomb::coding::golomb;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &[u8]| {
    if input.len() < 16 {
        return;
    }
    let data = u64::from_le_bytes(input[0..8].try_into().unwrap());
    let m = u64::from_le_bytes(input[8..16].try_into().unwrap());

    let code = match golomb::encode(data, m) {
        Ok(code) => code,
        Err(_) => return,
    };

    // The bits above 'len' must be zero and the formatter must agree with
    // the reported length.
    assert!(code.len <= 64);
    if code.len < 64 {
        assert_eq!(code.bits >> code.len, 0);
    }
    assert_eq!(code.to_bit_string().len(), code.len as usize);

    // Reverse the construction: a unary quotient over a truncated binary
    // remainder.
    let mut pos = code.len;
    let mut q = 0u64;
    loop {
        assert!(pos > 0);
        pos -= 1;
        if (code.bits >> pos) & 1 == 1 {
            break;
        }
        q += 1;
    }
    let rlen = pos;
    let rbits = if rlen == 0 {
        0
    } else {
        code.bits & ((1u64 << rlen) - 1)
    };
    let b = m.ilog2();
    let threshold = (1u128 << (b + 1)) - u128::from(m);
    let r = if rlen == b {
        rbits
    } else {
        (u128::from(rbits) - threshold) as u64
    };
    assert_eq!(q * m + r, data);
});
