// -*- mode: rust; -*-
//
// This file is part of fourq.
// Copyright (c) 2025 The fourq developers
// See LICENSE for licensing information.

//! Various constants: the curve parameter \\(d\\), the generator, the
//! group order, the endomorphism coefficient tables, and the scalar
//! decomposition lattice data.
//!
//! All field constants are little-endian limb pairs of the real and
//! imaginary components.

#![allow(clippy::unreadable_literal)]

#[cfg(feature = "precomputed-tables")]
use crate::curve_models::AffineNielsPoint;
use crate::edwards::EdwardsPoint;
use crate::field::{BaseFieldElement, FieldElement};
#[cfg(feature = "precomputed-tables")]
use crate::window::LookupTable;

/// The generator of the prime-order subgroup, in extended coordinates.
pub const GENERATOR: EdwardsPoint = EdwardsPoint {
    X: GENERATOR_X,
    Y: GENERATOR_Y,
    Z: FieldElement::ONE,
    T: GENERATOR_T,
};

// curve and generator
pub(crate) const EDWARDS_D: FieldElement = FieldElement { a: BaseFieldElement([0x0000000000000142, 0x00000000000000e4]), b: BaseFieldElement([0xb3821488f1fc0c8d, 0x5e472f846657e0fc]) };
pub(crate) const GENERATOR_X: FieldElement = FieldElement { a: BaseFieldElement([0x286592ad7b3833aa, 0x1a3472237c2fb305]), b: BaseFieldElement([0x96869fb360ac77f6, 0x1e1f553f2878aa9c]) };
pub(crate) const GENERATOR_Y: FieldElement = FieldElement { a: BaseFieldElement([0xb924a2462bcbb287, 0x0e3fee9ba120785a]), b: BaseFieldElement([0x49a7c344844c8b5c, 0x6e1c4af8630e0242]) };
pub(crate) const GENERATOR_T: FieldElement = FieldElement { a: BaseFieldElement([0x894ba36ee8cee416, 0x35bfa1947fb0913e]), b: BaseFieldElement([0x673c574d296cd8d0, 0x7bfb41a38e7076ac]) };
pub(crate) const EDWARDS_D2: FieldElement = FieldElement { a: BaseFieldElement([0x0000000000000284, 0x00000000000001c8]), b: BaseFieldElement([0x67042911e3f8191b, 0x3c8e5f08ccafc1f9]) };
pub(crate) const INV_TWO: BaseFieldElement = BaseFieldElement([0x0000000000000000, 0x4000000000000000]);

// group order
pub(crate) const L: [u64; 4] = [0x2fb2540ec7768ce7, 0xdfbd004dfe0f7999, 0xf05397829cbc14e5, 0x0029cbc14e5e0a72];
pub(crate) const LFACTOR: u64 = 0xe12fe5f079bc3929;
pub(crate) const RR: [u64; 4] = [0xc81db8795ff3d621, 0x173ea5aaea6b387d, 0x3d01b7c72136f61c, 0x0006a5f16ac8f9d3];

// endomorphism eigenvalues (as scalars, little-endian limbs)
pub(crate) const LAMBDA_PSI: [u64; 4] = [0x00ce5ab2e077f7a3, 0x7a21bbe8f917f255, 0xaa2d84fa47123a56, 0x001d6986b3c37ddf];
pub(crate) const LAMBDA_PHI: [u64; 4] = [0x24c41dd199d0e42c, 0xa3cd8a58a4004b50, 0x2c502a7d8197cac0, 0x0021e462599ea677];
pub(crate) const LAMBDA_PSI_PHI: [u64; 4] = [0x683c3b4abf8ffe95, 0xf5449d8a6e318a56, 0x9c4e66deea5e9f1b, 0x000d712b593ceecb];

pub(crate) const PSI_X_NUM: [FieldElement; 9] = [
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0x9861d0c6b62b5e03, 0x10f63b379ad4cdcd]), b: BaseFieldElement([0x000000000000004c, 0x7fffffffffffffcd]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0x1ea1b1df83103c14, 0x03672a065bd9278e]), b: BaseFieldElement([0xffffffffffffff6e, 0x000000000000005f]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0x11d005b931cb17b1, 0x10051e9f4b77b684]), b: BaseFieldElement([0xffffffffffffffe8, 0x0000000000000011]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0x74dcd57cebce74c3, 0x1964de2c3afad20c]), b: BaseFieldElement([0xffffffffffffffeb, 0x7ffffffffffffff3]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
];
pub(crate) const PSI_X_DEN: [FieldElement; 9] = [
    FieldElement { a: BaseFieldElement([0x0000000000000028, 0x6000000000000003]), b: BaseFieldElement([0xcf214e49fa6ffdd7, 0x359aa95d9340f31d]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0xffffffffffffff66, 0x0000000000000065]), b: BaseFieldElement([0x30c3a18d6c56bc06, 0x21ec766f35a99b9b]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0x0000000000000088, 0x7fffffffffffffa0]), b: BaseFieldElement([0xe38b90f535b75551, 0x7c6a31cc33593da5]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0x000000000000000f, 0x7ffffffffffffff4]), b: BaseFieldElement([0x6135592621320fcb, 0x3558bf14dcfa79ad]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0x0000000000000001, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
];

pub(crate) const PSI_Y_NUM: [FieldElement; 9] = [
    FieldElement { a: BaseFieldElement([0x0000000000000028, 0x6000000000000003]), b: BaseFieldElement([0xcf214e49fa6ffdd7, 0x359aa95d9340f31d]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0xfffffffffffffffe, 0x7ffffffffffffff9]), b: BaseFieldElement([0x75848ba8c3402123, 0x53af675045fd52ee]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0x0000000000000002, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0xfffffffffffffffe, 0x7fffffffffffffff]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
];
pub(crate) const PSI_Y_DEN: [FieldElement; 9] = [
    FieldElement { a: BaseFieldElement([0x0000000000000028, 0x6000000000000003]), b: BaseFieldElement([0xcf214e49fa6ffdd7, 0x359aa95d9340f31d]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0xffffffffffffff53, 0x7fffffffffffff81]), b: BaseFieldElement([0x5631ec22c029553e, 0x313e3ea4304ecb76]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0x00000000000000bf, 0x0000000000000084]), b: BaseFieldElement([0xaa75ca0917485722, 0x090c4a7fdab3b56b]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0xffffffffffffffeb, 0x7ffffffffffffff3]), b: BaseFieldElement([0x74dcd57cebce74c3, 0x1964de2c3afad20c]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0x0000000000000001, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
];

pub(crate) const PHI_X_NUM: [FieldElement; 8] = [
    FieldElement { a: BaseFieldElement([0x0c7690bdf22ea131, 0x087549161f50b38c]), b: BaseFieldElement([0x73896f420dd15ed4, 0x378ab6e9e0af4c71]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0x8762c41d49ab1cd6, 0x20df9f07450ffd3e]), b: BaseFieldElement([0x6d562fc5373e9e6c, 0x6c26ab24c42641f7]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0xf13a77c56ca9c654, 0x7e40c1f175e0058a]), b: BaseFieldElement([0xccb26f161d7d6902, 0x5d37355f3af39d31]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0xaf4b403b61b5af24, 0x66174d4258783b12]), b: BaseFieldElement([0xffffffffffffffe4, 0x7fffffffffffffeb]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
];
pub(crate) const PHI_X_DEN: [FieldElement; 8] = [
    FieldElement { a: BaseFieldElement([0x0c7690bdf22ea131, 0x087549161f50b38c]), b: BaseFieldElement([0x73896f420dd15ed4, 0x378ab6e9e0af4c71]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0x2bfcbd99ce49d6dc, 0x2818759998deaefe]), b: BaseFieldElement([0xd72de36d5a3d47e6, 0x0987ce0ef4f64a44]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0x0ec5883a935639af, 0x01bf3e0e8a1ffa79]), b: BaseFieldElement([0x7c8183e2ebc00b08, 0x313a77c56ca9c64f]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0x0000000000000001, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
];

pub(crate) const PHI_Y_NUM: [FieldElement; 8] = [
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0xf3896f420dd15ece, 0x778ab6e9e0af4c73]), b: BaseFieldElement([0x8c7690bdf22ea12b, 0x487549161f50b38e]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0x2f156dd3c15e98e0, 0x33896f420dd15ed6]), b: BaseFieldElement([0xaf156dd3c15e98e6, 0x73896f420dd15ecf]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0x0000000000000001, 0x3fffffffffffffff]), b: BaseFieldElement([0x0000000000000002, 0x3fffffffffffffff]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0x8e10b4818cc2caf2, 0x11c95bfbd8892626]), b: BaseFieldElement([0x11c95bfbd8892625, 0x47085a40c6616579]) },
];
pub(crate) const PHI_Y_DEN: [FieldElement; 8] = [
    FieldElement { a: BaseFieldElement([0xeb71d76bbd92d341, 0x26b535cfea087ae6]), b: BaseFieldElement([0x25f68bed001bba5d, 0x4d8286f0304356b6]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0xf18e52db58629c73, 0x5b6606837b6145f5]), b: BaseFieldElement([0x275ecea08bfaa5d6, 0x35848ba8c3402120]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0xd3af675045fd52ec, 0x7ac245d461a01092]), b: BaseFieldElement([0x0000000000000006, 0x4000000000000000]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0x0000000000000001, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
    FieldElement { a: BaseFieldElement([0x0000000000000000, 0x0000000000000000]), b: BaseFieldElement([0x0000000000000000, 0x0000000000000000]) },
];

// scalar decomposition: reduced lattice basis (two's complement),
// truncated Babai multipliers, and range/parity offset vectors
pub(crate) const BASIS: [[u64; 4]; 4] = [
    [0x17b9ae6a35f76dcf, 0xea1ae75472585e5e, 0xfd5b97248621cb7d, 0x0db86d9a4cb7b87c],
    [0x032349d92088cbbb, 0x0085e1a43016cc9f, 0x1e9b25b44364721b, 0x16f45c47328b5594],
    [0x0bdcd7351afbb6e8, 0x1ae93966c6fd96ff, 0xe885c2149d5dddcd, 0x06dc36cd265bdc3e],
    [0x1b386b5c4f865ac3, 0x060fe40399838e9c, 0x2317a4a1aa488d7e, 0xd75e58feec4ab085],
];
pub(crate) const ELL: [[u64; 4]; 4] = [
    [0x8d21f9eb2f824261, 0xabb11cf213e9bb25, 0x9ce3468545c0579d, 0x0000000000000005],
    [0x1ebfaa60ed1a37a7, 0xaea535dfa1da54b2, 0x58a025f696cc1fc3, 0x0000000000000000],
    [0x14aa01589b8ce8ab, 0x4423e9804216ea89, 0xf06736a996421a27, 0x0000000000000003],
    [0xcb09da99af21ae11, 0x217df433dcb1dfc5, 0xc18908c527b6dba7, 0x0000000000000002],
];
pub(crate) const OFFSET: [u64; 4] = [0x51a2ac1263ae45de, 0xa5a6658a2aa7eef3, 0x67fbba1dcb56c3a4, 0x75ad27118ea246b7];
pub(crate) const OFFSET_ALT: [u64; 4] = [0x695c5a7c99a5b3ad, 0x8fc14cde9d004d51, 0x6557514251788f21, 0x836594abdb59ff33];

/// Eight-entry combination table for the generator and its endomorphism
/// images, used by fixed-base scalar multiplication: entry \\(u\\) holds
/// \\(G + u_0\\psi(G) + u_1\\phi(G) + u_2\\psi\\phi(G)\\) in affine Niels form.
#[cfg(feature = "precomputed-tables")]
pub(crate) const BASEPOINT_TABLE: LookupTable<AffineNielsPoint> = LookupTable([
    AffineNielsPoint { y_plus_x: FieldElement { a: BaseFieldElement([0xe18a34f3a703e631, 0x287460bf1d502b5f]), b: BaseFieldElement([0xe02e62f7e4f90353, 0x0c3ba0378b86acde]) }, y_minus_x: FieldElement { a: BaseFieldElement([0x90bf0f98b0937edc, 0x740b7c7824f0c555]), b: BaseFieldElement([0xb321239123a01366, 0x4ffcf5b93a9557a5]) }, xy2d: FieldElement { a: BaseFieldElement([0x297afccbabda42bb, 0x5948d137556c97c6]), b: BaseFieldElement([0xa8189a393330684c, 0x0caf2b720a341f27]) } },
    AffineNielsPoint { y_plus_x: FieldElement { a: BaseFieldElement([0x6520d217ef1775f9, 0x5544fb6d10de97e8]), b: BaseFieldElement([0x74cf274c246ff3c1, 0x5d4b0a1c4fe44996]) }, y_minus_x: FieldElement { a: BaseFieldElement([0x6a3001222d701ecd, 0x254ba86d669724a0]), b: BaseFieldElement([0x85c49aced3529d22, 0x77d405c693aaac74]) }, xy2d: FieldElement { a: BaseFieldElement([0x0865bfa5ef1d98a7, 0x7f3d9c38d206d7de]), b: BaseFieldElement([0x472c62fa6a2eff24, 0x4feb32cae7c3076c]) } },
    AffineNielsPoint { y_plus_x: FieldElement { a: BaseFieldElement([0x28c1c171d822bcac, 0x6cdcfde6dafe2685]), b: BaseFieldElement([0x00282fe5f8cc5eaf, 0x372c5b84f1c5ff38]) }, y_minus_x: FieldElement { a: BaseFieldElement([0xa14b66c0fbf2bd27, 0x7cc6dc59b720a997]), b: BaseFieldElement([0x895514c181e62c3b, 0x3b2216720d1a8a0b]) }, xy2d: FieldElement { a: BaseFieldElement([0x4f561123a20d86a0, 0x7ad2951df8b4b007]), b: BaseFieldElement([0xd894bfa663db380a, 0x3a0f31d7ddd4a26c]) } },
    AffineNielsPoint { y_plus_x: FieldElement { a: BaseFieldElement([0xd2874078cd0cea45, 0x7e9363211e90dad9]), b: BaseFieldElement([0xc58255a5d9912330, 0x577781ec40e88b6a]) }, y_minus_x: FieldElement { a: BaseFieldElement([0x96c86b6870611f02, 0x3c59922cf2ef9449]), b: BaseFieldElement([0x4f7e8cb13309658e, 0x165e1de89b713b1c]) }, xy2d: FieldElement { a: BaseFieldElement([0x99cae305f7b37fd2, 0x50ca90b61caa9907]), b: BaseFieldElement([0x547ddff36bfb9416, 0x648898474519b1dc]) } },
    AffineNielsPoint { y_plus_x: FieldElement { a: BaseFieldElement([0x60da3fef2317b428, 0x4c377db56fcc70c2]), b: BaseFieldElement([0x31a816b849e8c0cd, 0x274df86f63423aa3]) }, y_minus_x: FieldElement { a: BaseFieldElement([0x581c96647c5fc36d, 0x361a98ee6d87272e]), b: BaseFieldElement([0xd75af2e860a19a34, 0x2b76d2042ae6f84e]) }, xy2d: FieldElement { a: BaseFieldElement([0x47a3c5c1c9d5107c, 0x4de6e8e10e6df2a0]), b: BaseFieldElement([0xb2ca4acb9fb218a5, 0x2edc64ab0cf0d1a2]) } },
    AffineNielsPoint { y_plus_x: FieldElement { a: BaseFieldElement([0xecdd60400d10169f, 0x38b24c1e19387e86]), b: BaseFieldElement([0x09e4e6efc47f2479, 0x49656f187f573366]) }, y_minus_x: FieldElement { a: BaseFieldElement([0xd26aa9f61bf60639, 0x5602a52112636b99]), b: BaseFieldElement([0x979e64359cceb4bb, 0x3d8c3f8c3d2f85af]) }, xy2d: FieldElement { a: BaseFieldElement([0xdcedc3d77f04f89b, 0x634281c21cd3e828]), b: BaseFieldElement([0x1bc9c95eb80b6ea9, 0x7521568a52c5cf1d]) } },
    AffineNielsPoint { y_plus_x: FieldElement { a: BaseFieldElement([0xe288d90cede5c312, 0x12f3e17021b35e67]), b: BaseFieldElement([0x671bbb2ae34f183b, 0x2b4cff4029d8bb43]) }, y_minus_x: FieldElement { a: BaseFieldElement([0x8efddef3a181c69f, 0x4e303efdc58251de]), b: BaseFieldElement([0x94ad63c057851c8a, 0x036fd0deaa4f0c99]) }, xy2d: FieldElement { a: BaseFieldElement([0x875aac9f562a0960, 0x655b4e2c6c071dcb]), b: BaseFieldElement([0xcd354f3f60f50f48, 0x1b795254d6c1cd68]) } },
    AffineNielsPoint { y_plus_x: FieldElement { a: BaseFieldElement([0xa7c75fb74decf68f, 0x5ee9fbb458c33266]), b: BaseFieldElement([0x9a2ead36635e37d6, 0x6966a42c7211bb0e]) }, y_minus_x: FieldElement { a: BaseFieldElement([0xd8503f042f75632f, 0x69e0410da71125f5]), b: BaseFieldElement([0xbd393917dba5b8a6, 0x7e52553a3c9424f1]) }, xy2d: FieldElement { a: BaseFieldElement([0x872997feedb2ee2a, 0x2cbcf921b7e8aa04]), b: BaseFieldElement([0xf1848a8adc29f0c5, 0x4e442531fd0ad9d4]) } },
]);

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::ValidityCheck;

    #[test]
    fn d2_is_twice_d() {
        assert_eq!(EDWARDS_D2, &EDWARDS_D + &EDWARDS_D);
    }

    #[test]
    fn generator_t_is_xy() {
        assert_eq!(GENERATOR_T, &GENERATOR_X * &GENERATOR_Y);
    }

    #[test]
    fn generator_is_on_curve() {
        assert!(GENERATOR.is_valid());
    }

    #[cfg(feature = "precomputed-tables")]
    #[test]
    fn basepoint_table_entry_zero_is_generator() {
        let g = &BASEPOINT_TABLE.0[0];
        assert_eq!(g.y_plus_x, &GENERATOR_Y + &GENERATOR_X);
        assert_eq!(g.y_minus_x, &GENERATOR_Y - &GENERATOR_X);
        assert_eq!(g.xy2d, &GENERATOR_T * &EDWARDS_D2);
    }

    #[test]
    fn offsets_differ_in_parity() {
        assert_eq!(OFFSET[0] & 1, 0);
        assert_eq!(OFFSET_ALT[0] & 1, 1);
    }
}
