use hex_literal::hex;
use md5::{Digest, Md5};

fn md5(input: &[u8]) -> [u8; 16] {
    let mut out = [0u8; 16];
    out.copy_from_slice(&Md5::digest(input));
    out
}

#[test]
fn md5_rfc1321_suite() {
    let vectors: [(&[u8], [u8; 16]); 7] = [
        (b"", hex!("d41d8cd98f00b204e9800998ecf8427e")),
        (b"a", hex!("0cc175b9c0f1b6a831c399e269772661")),
        (b"abc", hex!("900150983cd24fb0d6963f7d28e17f72")),
        (b"message digest", hex!("f96b697d7cb7938d525a2f31aaf161d0")),
        (
            b"abcdefghijklmnopqrstuvwxyz",
            hex!("c3fcd3d76192e4007dfb496cca67e13b"),
        ),
        (
            b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
            hex!("d174ab98d277d9f5a5611c2c9f419d9f"),
        ),
        (
            b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
            hex!("57edf4a22be3c955ac49da2e2107b67a"),
        ),
    ];
    for (input, expected) in vectors.iter() {
        assert_eq!(&md5(input), expected);
    }
}

#[test]
fn md5_data() {
    assert_eq!(md5(b"data"), hex!("8d777f385d3dfec8815d20f7496026dc"));
}

#[test]
fn md5_incremental_matches_one_shot() {
    let input = b"12345678901234567890123456789012345678901234567890123456789012345678901234567890";
    for split in 0..input.len() {
        let mut hasher = Md5::new();
        hasher.update(&input[..split]);
        hasher.update(&input[split..]);
        assert_eq!(
            hasher.finalize()[..],
            hex!("57edf4a22be3c955ac49da2e2107b67a")
        );
    }
}

#[test]
fn md5_million_a() {
    let mut hasher = Md5::new();
    let chunk = [b'a'; 1000];
    for _ in 0..1000 {
        hasher.update(&chunk[..]);
    }
    assert_eq!(
        hasher.finalize()[..],
        hex!("7707d6ae4e027c70eea2a935c2296f21")
    );
}

#[test]
fn md5_padding_edges() {
    // `printf 'a%.0s' $(seq n) | openssl dgst -md5`
    let vectors: [(usize, [u8; 16]); 5] = [
        (55, hex!("ef1772b6dff9a122358552954ad0df65")),
        (56, hex!("3b0c8ac703f828b04c6c197006d17218")),
        (63, hex!("b06521f39153d618550606be297466d5")),
        (64, hex!("014842d480b571495a4a0363793f7367")),
        (65, hex!("c743a45e0d2e6a95cb859adae0248435")),
    ];
    for (len, expected) in vectors.iter() {
        let input = vec![b'a'; *len];
        assert_eq!(md5(&input), *expected, "len {}", len);

        let mut hasher = Md5::new();
        for byte in input.iter() {
            hasher.update(core::slice::from_ref(byte));
        }
        assert_eq!(hasher.finalize()[..], expected[..], "len {}", len);
    }
}

#[test]
fn md5_core_uses_eager_buffer() {
    use md5::digest::{block_buffer::Eager, core_api::BufferKindUser};

    fn eager<C: BufferKindUser<BufferKind = Eager>>() {}
    eager::<md5::Md5Core>();
}
