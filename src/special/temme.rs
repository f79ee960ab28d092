//! Temme's uniform asymptotic expansion of the incomplete gamma functions.
//!
//! With λ = x/a and η = sign(λ − 1)·√(2(λ − 1 − ln λ)),
//!
//! Q(a, x) = ½·erfc(η√(a/2)) + R(a, η),
//! P(a, x) = ½·erfc(−η√(a/2)) − R(a, η),
//! R(a, η) = e^{−aη²/2} / √(2πa) · Σ_k c_k(η) a^{−k}.
//!
//! Used for large `a` with `x` near `a`, where the series and the Legendre
//! fraction need O(√a) terms. Seven orders in 1/a with each c_k truncated
//! at η^21 keep the remainder below an ulp for a > 200 and |λ − 1| ≤ 0.3.

use crate::consts::PI;
use crate::primitive::{exp, sqrt};
use super::erf_fn::erfc;
use super::stirling::log1pmx;

/// Shapes above this may use the expansion.
pub(crate) const TEMME_MIN_SHAPE: f64 = 200.0;

/// Largest |x − a| / a covered.
pub(crate) const TEMME_BAND: f64 = 0.3;

const ORDERS: usize = 7;
const DEGREE: usize = 22;

/// Taylor coefficients of c_k(η) in η, row k.
const TEMME: [[f64; DEGREE]; ORDERS] = [
    [
        -0.3333333333333333, 0.08333333333333333, -0.014814814814814815,
        0.0011574074074074073, 0.0003527336860670194, -0.0001787551440329218,
        3.919263178522438e-05, -2.185448510679992e-06, -1.85406221071516e-06,
        8.296711340953087e-07, -1.7665952736826078e-07, 6.707853543401498e-09,
        1.0261809784240309e-08, -4.382036018453353e-09, 9.14769958223679e-10,
        -2.5514193994946248e-11, -5.830772132550426e-11, 2.4361948020667415e-11,
        -5.0276692801141755e-12, 1.1004392031956135e-13, 3.371763262400985e-13,
        -1.392388722418162e-13,
    ],
    [
        -0.001851851851851852, -0.003472222222222222, 0.0026455026455026454,
        -0.0009902263374485596, 0.00020576131687242798, -4.018775720164609e-07,
        -1.8098550334489977e-05, 7.64916091608111e-06, -1.6120900894563446e-06,
        4.647127802807434e-09, 1.378633446915721e-07, -5.752545603517705e-08,
        1.1951628599778148e-08, -1.7543241719747647e-11, -1.0091543710600413e-09,
        4.162792991842583e-10, -8.56390702649298e-11, 6.067215101604758e-14,
        7.1624989648114856e-12, -2.933186643771437e-12, 5.996696365683689e-13,
        -2.1671786527323313e-16,
    ],
    [
        0.004133597883597883, -0.0026813271604938273, 0.0007716049382716049,
        2.0093878600823047e-06, -0.0001073665322636516, 5.2923448829120125e-05,
        -1.2760635188618728e-05, 3.423578734096138e-08, 1.3721957309062934e-06,
        -6.298992138380055e-07, 1.4280614206064242e-07, -2.0477098421990866e-10,
        -1.409252991086752e-08, 6.228974084922022e-09, -1.3670488396617114e-09,
        9.428356159014678e-13, 1.2872252400089318e-10, -5.5645956134363323e-11,
        1.197593554636698e-11, -4.1689782251838634e-15, -1.0940640427884595e-12,
        4.662239946390136e-13,
    ],
    [
        0.0006494341563786008, 0.00022947209362139917, -0.0004691894943952557,
        0.00026772063206283885, -7.561801671883977e-05, -2.396505113867297e-07,
        1.1082654115347302e-05, -5.6749528269915965e-06, 1.4230900732435883e-06,
        -2.7861080291528143e-11, -1.6958404091930278e-07, 8.099464905388083e-08,
        -1.9111168485973655e-08, 2.3928620439808118e-12, 2.0620131815488797e-09,
        -9.460496661855133e-10, 2.1541049775774907e-10, -1.388823336813903e-14,
        -2.1894761681963938e-11, 9.790998951171684e-12, -2.178219188018096e-12,
        6.208819573407901e-17,
    ],
    [
        -0.0008618882909167117, 0.0007840392217200666, -0.0002990724803031902,
        -1.4638452578843418e-06, 6.641498215465122e-05, -3.968365047179435e-05,
        1.1375726970678419e-05, 2.507497226237533e-10, -1.6954149536558305e-06,
        8.907507532205309e-07, -2.292934834000805e-07, 2.956794137544049e-11,
        2.8865829742708783e-08, -1.4189739437803219e-08, 3.4463580499464896e-09,
        -2.3024517174528067e-13, -3.9409233028046403e-10, 1.86023389685045e-10,
        -4.356323005056618e-11, 1.278600101629623e-15, 4.67927502665792e-12,
        -2.149246470613483e-12,
    ],
    [
        -0.00033679855336635813, -6.972813758365857e-05, 0.0002772753244959392,
        -0.00019932570516188847, 6.797780477937208e-05, 1.419062920643967e-07,
        -1.3594048189768693e-05, 8.018470256334202e-06, -2.291481176508095e-06,
        -3.252473551298454e-10, 3.4652846491085265e-07, -1.8447187191171344e-07,
        4.8240967037894184e-08, -1.7989466721743514e-14, -6.306194500013523e-09,
        3.162417628774568e-09, -7.840924253697429e-10, 5.192679165254041e-15,
        9.358944242306784e-11, -4.513426216163278e-11, 1.0799129993116828e-11,
        -3.661886712685252e-17,
    ],
    [
        0.0005313079364639922, -0.0005921664373536939, 0.0002708782096718045,
        7.902353232660328e-07, -8.153969367561969e-05, 5.61168275310625e-05,
        -1.8329116582843375e-05, -3.0796134506033047e-09, 3.465155368803609e-06,
        -2.0291327396058603e-06, 5.788792863149004e-07, 2.338630673826657e-13,
        -8.828600746330484e-08, 4.7435958880408125e-08, -1.2545415020710383e-08,
        8.649648858010293e-14, 1.6846058979264062e-09, -8.575492823577594e-10,
        2.1598224929232125e-10, -7.613230520476153e-16, -2.6639822008536144e-11,
        1.3065700536611057e-11,
    ],
];

/// `(P(a, x), Q(a, x))` for a > 200 and |x − a| ≤ 0.3a.
pub(crate) const fn temme_pair(a: f64, x: f64) -> (f64, f64) {
    let sigma = (x - a) / a;
    // λ − 1 − ln λ = −log1pmx(σ)
    let half_eta2 = -log1pmx(sigma);
    let eta = if sigma < 0.0 { -sqrt(2.0 * half_eta2) } else { sqrt(2.0 * half_eta2) };
    let r = exp(-a * half_eta2) / sqrt(2.0 * PI * a) * orders(eta, 1.0 / a, 0);
    let y = eta * sqrt(0.5 * a);
    (0.5 * erfc(-y) - r, 0.5 * erfc(y) + r)
}

/// Σ_{j ≥ k} c_j(η) a^{−(j−k)}
const fn orders(eta: f64, inv_a: f64, k: usize) -> f64 {
    let ck = horner(&TEMME[k], eta, 0);
    if k + 1 == ORDERS {
        ck
    } else {
        ck + inv_a * orders(eta, inv_a, k + 1)
    }
}

const fn horner(c: &[f64; DEGREE], t: f64, i: usize) -> f64 {
    if i + 1 == DEGREE {
        c[i]
    } else {
        c[i] + t * horner(c, t, i + 1)
    }
}
