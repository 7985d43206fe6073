//! Cached powers of five for the fast binary reconstructor.
//!
//! Generated by `powgen -l -325 -u 308`. Do not edit by hand.

#![allow(clippy::unreadable_literal)]

/// Leading 64 bits of `5^n`, truncated, and the binary exponent that
/// scales them back: `5^n ≈ mantissa × 2^binary_exponent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CachedPower {
	pub mantissa: u64,
	pub binary_exponent: i16,
}

/// Smallest decimal exponent covered by [`POWERS`].
pub const MIN_EXPONENT: i64 = -325;

/// Largest decimal exponent covered by [`POWERS`].
pub const MAX_EXPONENT: i64 = 308;

/// Indexed by `exponent - MIN_EXPONENT`.
pub static POWERS: [CachedPower; 634] = [
	CachedPower { mantissa: 0xa5ced43b7e3e9188, binary_exponent: -818 }, // 5^-325
	CachedPower { mantissa: 0xcf42894a5dce35ea, binary_exponent: -816 }, // 5^-324
	CachedPower { mantissa: 0x818995ce7aa0e1b2, binary_exponent: -813 }, // 5^-323
	CachedPower { mantissa: 0xa1ebfb4219491a1f, binary_exponent: -811 }, // 5^-322
	CachedPower { mantissa: 0xca66fa129f9b60a6, binary_exponent: -809 }, // 5^-321
	CachedPower { mantissa: 0xfd00b897478238d0, binary_exponent: -807 }, // 5^-320
	CachedPower { mantissa: 0x9e20735e8cb16382, binary_exponent: -804 }, // 5^-319
	CachedPower { mantissa: 0xc5a890362fddbc62, binary_exponent: -802 }, // 5^-318
	CachedPower { mantissa: 0xf712b443bbd52b7b, binary_exponent: -800 }, // 5^-317
	CachedPower { mantissa: 0x9a6bb0aa55653b2d, binary_exponent: -797 }, // 5^-316
	CachedPower { mantissa: 0xc1069cd4eabe89f8, binary_exponent: -795 }, // 5^-315
	CachedPower { mantissa: 0xf148440a256e2c76, binary_exponent: -793 }, // 5^-314
	CachedPower { mantissa: 0x96cd2a865764dbca, binary_exponent: -790 }, // 5^-313
	CachedPower { mantissa: 0xbc807527ed3e12bc, binary_exponent: -788 }, // 5^-312
	CachedPower { mantissa: 0xeba09271e88d976b, binary_exponent: -786 }, // 5^-311
	CachedPower { mantissa: 0x93445b8731587ea3, binary_exponent: -783 }, // 5^-310
	CachedPower { mantissa: 0xb8157268fdae9e4c, binary_exponent: -781 }, // 5^-309
	CachedPower { mantissa: 0xe61acf033d1a45df, binary_exponent: -779 }, // 5^-308
	CachedPower { mantissa: 0x8fd0c16206306bab, binary_exponent: -776 }, // 5^-307
	CachedPower { mantissa: 0xb3c4f1ba87bc8696, binary_exponent: -774 }, // 5^-306
	CachedPower { mantissa: 0xe0b62e2929aba83c, binary_exponent: -772 }, // 5^-305
	CachedPower { mantissa: 0x8c71dcd9ba0b4925, binary_exponent: -769 }, // 5^-304
	CachedPower { mantissa: 0xaf8e5410288e1b6f, binary_exponent: -767 }, // 5^-303
	CachedPower { mantissa: 0xdb71e91432b1a24a, binary_exponent: -765 }, // 5^-302
	CachedPower { mantissa: 0x892731ac9faf056e, binary_exponent: -762 }, // 5^-301
	CachedPower { mantissa: 0xab70fe17c79ac6ca, binary_exponent: -760 }, // 5^-300
	CachedPower { mantissa: 0xd64d3d9db981787d, binary_exponent: -758 }, // 5^-299
	CachedPower { mantissa: 0x85f0468293f0eb4e, binary_exponent: -755 }, // 5^-298
	CachedPower { mantissa: 0xa76c582338ed2621, binary_exponent: -753 }, // 5^-297
	CachedPower { mantissa: 0xd1476e2c07286faa, binary_exponent: -751 }, // 5^-296
	CachedPower { mantissa: 0x82cca4db847945ca, binary_exponent: -748 }, // 5^-295
	CachedPower { mantissa: 0xa37fce126597973c, binary_exponent: -746 }, // 5^-294
	CachedPower { mantissa: 0xcc5fc196fefd7d0c, binary_exponent: -744 }, // 5^-293
	CachedPower { mantissa: 0xff77b1fcbebcdc4f, binary_exponent: -742 }, // 5^-292
	CachedPower { mantissa: 0x9faacf3df73609b1, binary_exponent: -739 }, // 5^-291
	CachedPower { mantissa: 0xc795830d75038c1d, binary_exponent: -737 }, // 5^-290
	CachedPower { mantissa: 0xf97ae3d0d2446f25, binary_exponent: -735 }, // 5^-289
	CachedPower { mantissa: 0x9becce62836ac577, binary_exponent: -732 }, // 5^-288
	CachedPower { mantissa: 0xc2e801fb244576d5, binary_exponent: -730 }, // 5^-287
	CachedPower { mantissa: 0xf3a20279ed56d48a, binary_exponent: -728 }, // 5^-286
	CachedPower { mantissa: 0x9845418c345644d6, binary_exponent: -725 }, // 5^-285
	CachedPower { mantissa: 0xbe5691ef416bd60c, binary_exponent: -723 }, // 5^-284
	CachedPower { mantissa: 0xedec366b11c6cb8f, binary_exponent: -721 }, // 5^-283
	CachedPower { mantissa: 0x94b3a202eb1c3f39, binary_exponent: -718 }, // 5^-282
	CachedPower { mantissa: 0xb9e08a83a5e34f07, binary_exponent: -716 }, // 5^-281
	CachedPower { mantissa: 0xe858ad248f5c22c9, binary_exponent: -714 }, // 5^-280
	CachedPower { mantissa: 0x91376c36d99995be, binary_exponent: -711 }, // 5^-279
	CachedPower { mantissa: 0xb58547448ffffb2d, binary_exponent: -709 }, // 5^-278
	CachedPower { mantissa: 0xe2e69915b3fff9f9, binary_exponent: -707 }, // 5^-277
	CachedPower { mantissa: 0x8dd01fad907ffc3b, binary_exponent: -704 }, // 5^-276
	CachedPower { mantissa: 0xb1442798f49ffb4a, binary_exponent: -702 }, // 5^-275
	CachedPower { mantissa: 0xdd95317f31c7fa1d, binary_exponent: -700 }, // 5^-274
	CachedPower { mantissa: 0x8a7d3eef7f1cfc52, binary_exponent: -697 }, // 5^-273
	CachedPower { mantissa: 0xad1c8eab5ee43b66, binary_exponent: -695 }, // 5^-272
	CachedPower { mantissa: 0xd863b256369d4a40, binary_exponent: -693 }, // 5^-271
	CachedPower { mantissa: 0x873e4f75e2224e68, binary_exponent: -690 }, // 5^-270
	CachedPower { mantissa: 0xa90de3535aaae202, binary_exponent: -688 }, // 5^-269
	CachedPower { mantissa: 0xd3515c2831559a83, binary_exponent: -686 }, // 5^-268
	CachedPower { mantissa: 0x8412d9991ed58091, binary_exponent: -683 }, // 5^-267
	CachedPower { mantissa: 0xa5178fff668ae0b6, binary_exponent: -681 }, // 5^-266
	CachedPower { mantissa: 0xce5d73ff402d98e3, binary_exponent: -679 }, // 5^-265
	CachedPower { mantissa: 0x80fa687f881c7f8e, binary_exponent: -676 }, // 5^-264
	CachedPower { mantissa: 0xa139029f6a239f72, binary_exponent: -674 }, // 5^-263
	CachedPower { mantissa: 0xc987434744ac874e, binary_exponent: -672 }, // 5^-262
	CachedPower { mantissa: 0xfbe9141915d7a922, binary_exponent: -670 }, // 5^-261
	CachedPower { mantissa: 0x9d71ac8fada6c9b5, binary_exponent: -667 }, // 5^-260
	CachedPower { mantissa: 0xc4ce17b399107c22, binary_exponent: -665 }, // 5^-259
	CachedPower { mantissa: 0xf6019da07f549b2b, binary_exponent: -663 }, // 5^-258
	CachedPower { mantissa: 0x99c102844f94e0fb, binary_exponent: -660 }, // 5^-257
	CachedPower { mantissa: 0xc0314325637a1939, binary_exponent: -658 }, // 5^-256
	CachedPower { mantissa: 0xf03d93eebc589f88, binary_exponent: -656 }, // 5^-255
	CachedPower { mantissa: 0x96267c7535b763b5, binary_exponent: -653 }, // 5^-254
	CachedPower { mantissa: 0xbbb01b9283253ca2, binary_exponent: -651 }, // 5^-253
	CachedPower { mantissa: 0xea9c227723ee8bcb, binary_exponent: -649 }, // 5^-252
	CachedPower { mantissa: 0x92a1958a7675175f, binary_exponent: -646 }, // 5^-251
	CachedPower { mantissa: 0xb749faed14125d36, binary_exponent: -644 }, // 5^-250
	CachedPower { mantissa: 0xe51c79a85916f484, binary_exponent: -642 }, // 5^-249
	CachedPower { mantissa: 0x8f31cc0937ae58d2, binary_exponent: -639 }, // 5^-248
	CachedPower { mantissa: 0xb2fe3f0b8599ef07, binary_exponent: -637 }, // 5^-247
	CachedPower { mantissa: 0xdfbdcece67006ac9, binary_exponent: -635 }, // 5^-246
	CachedPower { mantissa: 0x8bd6a141006042bd, binary_exponent: -632 }, // 5^-245
	CachedPower { mantissa: 0xaecc49914078536d, binary_exponent: -630 }, // 5^-244
	CachedPower { mantissa: 0xda7f5bf590966848, binary_exponent: -628 }, // 5^-243
	CachedPower { mantissa: 0x888f99797a5e012d, binary_exponent: -625 }, // 5^-242
	CachedPower { mantissa: 0xaab37fd7d8f58178, binary_exponent: -623 }, // 5^-241
	CachedPower { mantissa: 0xd5605fcdcf32e1d6, binary_exponent: -621 }, // 5^-240
	CachedPower { mantissa: 0x855c3be0a17fcd26, binary_exponent: -618 }, // 5^-239
	CachedPower { mantissa: 0xa6b34ad8c9dfc06f, binary_exponent: -616 }, // 5^-238
	CachedPower { mantissa: 0xd0601d8efc57b08b, binary_exponent: -614 }, // 5^-237
	CachedPower { mantissa: 0x823c12795db6ce57, binary_exponent: -611 }, // 5^-236
	CachedPower { mantissa: 0xa2cb1717b52481ed, binary_exponent: -609 }, // 5^-235
	CachedPower { mantissa: 0xcb7ddcdda26da268, binary_exponent: -607 }, // 5^-234
	CachedPower { mantissa: 0xfe5d54150b090b02, binary_exponent: -605 }, // 5^-233
	CachedPower { mantissa: 0x9efa548d26e5a6e1, binary_exponent: -602 }, // 5^-232
	CachedPower { mantissa: 0xc6b8e9b0709f109a, binary_exponent: -600 }, // 5^-231
	CachedPower { mantissa: 0xf867241c8cc6d4c0, binary_exponent: -598 }, // 5^-230
	CachedPower { mantissa: 0x9b407691d7fc44f8, binary_exponent: -595 }, // 5^-229
	CachedPower { mantissa: 0xc21094364dfb5636, binary_exponent: -593 }, // 5^-228
	CachedPower { mantissa: 0xf294b943e17a2bc4, binary_exponent: -591 }, // 5^-227
	CachedPower { mantissa: 0x979cf3ca6cec5b5a, binary_exponent: -588 }, // 5^-226
	CachedPower { mantissa: 0xbd8430bd08277231, binary_exponent: -586 }, // 5^-225
	CachedPower { mantissa: 0xece53cec4a314ebd, binary_exponent: -584 }, // 5^-224
	CachedPower { mantissa: 0x940f4613ae5ed136, binary_exponent: -581 }, // 5^-223
	CachedPower { mantissa: 0xb913179899f68584, binary_exponent: -579 }, // 5^-222
	CachedPower { mantissa: 0xe757dd7ec07426e5, binary_exponent: -577 }, // 5^-221
	CachedPower { mantissa: 0x9096ea6f3848984f, binary_exponent: -574 }, // 5^-220
	CachedPower { mantissa: 0xb4bca50b065abe63, binary_exponent: -572 }, // 5^-219
	CachedPower { mantissa: 0xe1ebce4dc7f16dfb, binary_exponent: -570 }, // 5^-218
	CachedPower { mantissa: 0x8d3360f09cf6e4bd, binary_exponent: -567 }, // 5^-217
	CachedPower { mantissa: 0xb080392cc4349dec, binary_exponent: -565 }, // 5^-216
	CachedPower { mantissa: 0xdca04777f541c567, binary_exponent: -563 }, // 5^-215
	CachedPower { mantissa: 0x89e42caaf9491b60, binary_exponent: -560 }, // 5^-214
	CachedPower { mantissa: 0xac5d37d5b79b6239, binary_exponent: -558 }, // 5^-213
	CachedPower { mantissa: 0xd77485cb25823ac7, binary_exponent: -556 }, // 5^-212
	CachedPower { mantissa: 0x86a8d39ef77164bc, binary_exponent: -553 }, // 5^-211
	CachedPower { mantissa: 0xa8530886b54dbdeb, binary_exponent: -551 }, // 5^-210
	CachedPower { mantissa: 0xd267caa862a12d66, binary_exponent: -549 }, // 5^-209
	CachedPower { mantissa: 0x8380dea93da4bc60, binary_exponent: -546 }, // 5^-208
	CachedPower { mantissa: 0xa46116538d0deb78, binary_exponent: -544 }, // 5^-207
	CachedPower { mantissa: 0xcd795be870516656, binary_exponent: -542 }, // 5^-206
	CachedPower { mantissa: 0x806bd9714632dff6, binary_exponent: -539 }, // 5^-205
	CachedPower { mantissa: 0xa086cfcd97bf97f3, binary_exponent: -537 }, // 5^-204
	CachedPower { mantissa: 0xc8a883c0fdaf7df0, binary_exponent: -535 }, // 5^-203
	CachedPower { mantissa: 0xfad2a4b13d1b5d6c, binary_exponent: -533 }, // 5^-202
	CachedPower { mantissa: 0x9cc3a6eec6311a63, binary_exponent: -530 }, // 5^-201
	CachedPower { mantissa: 0xc3f490aa77bd60fc, binary_exponent: -528 }, // 5^-200
	CachedPower { mantissa: 0xf4f1b4d515acb93b, binary_exponent: -526 }, // 5^-199
	CachedPower { mantissa: 0x991711052d8bf3c5, binary_exponent: -523 }, // 5^-198
	CachedPower { mantissa: 0xbf5cd54678eef0b6, binary_exponent: -521 }, // 5^-197
	CachedPower { mantissa: 0xef340a98172aace4, binary_exponent: -519 }, // 5^-196
	CachedPower { mantissa: 0x9580869f0e7aac0e, binary_exponent: -516 }, // 5^-195
	CachedPower { mantissa: 0xbae0a846d2195712, binary_exponent: -514 }, // 5^-194
	CachedPower { mantissa: 0xe998d258869facd7, binary_exponent: -512 }, // 5^-193
	CachedPower { mantissa: 0x91ff83775423cc06, binary_exponent: -509 }, // 5^-192
	CachedPower { mantissa: 0xb67f6455292cbf08, binary_exponent: -507 }, // 5^-191
	CachedPower { mantissa: 0xe41f3d6a7377eeca, binary_exponent: -505 }, // 5^-190
	CachedPower { mantissa: 0x8e938662882af53e, binary_exponent: -502 }, // 5^-189
	CachedPower { mantissa: 0xb23867fb2a35b28d, binary_exponent: -500 }, // 5^-188
	CachedPower { mantissa: 0xdec681f9f4c31f31, binary_exponent: -498 }, // 5^-187
	CachedPower { mantissa: 0x8b3c113c38f9f37e, binary_exponent: -495 }, // 5^-186
	CachedPower { mantissa: 0xae0b158b4738705e, binary_exponent: -493 }, // 5^-185
	CachedPower { mantissa: 0xd98ddaee19068c76, binary_exponent: -491 }, // 5^-184
	CachedPower { mantissa: 0x87f8a8d4cfa417c9, binary_exponent: -488 }, // 5^-183
	CachedPower { mantissa: 0xa9f6d30a038d1dbc, binary_exponent: -486 }, // 5^-182
	CachedPower { mantissa: 0xd47487cc8470652b, binary_exponent: -484 }, // 5^-181
	CachedPower { mantissa: 0x84c8d4dfd2c63f3b, binary_exponent: -481 }, // 5^-180
	CachedPower { mantissa: 0xa5fb0a17c777cf09, binary_exponent: -479 }, // 5^-179
	CachedPower { mantissa: 0xcf79cc9db955c2cc, binary_exponent: -477 }, // 5^-178
	CachedPower { mantissa: 0x81ac1fe293d599bf, binary_exponent: -474 }, // 5^-177
	CachedPower { mantissa: 0xa21727db38cb002f, binary_exponent: -472 }, // 5^-176
	CachedPower { mantissa: 0xca9cf1d206fdc03b, binary_exponent: -470 }, // 5^-175
	CachedPower { mantissa: 0xfd442e4688bd304a, binary_exponent: -468 }, // 5^-174
	CachedPower { mantissa: 0x9e4a9cec15763e2e, binary_exponent: -465 }, // 5^-173
	CachedPower { mantissa: 0xc5dd44271ad3cdba, binary_exponent: -463 }, // 5^-172
	CachedPower { mantissa: 0xf7549530e188c128, binary_exponent: -461 }, // 5^-171
	CachedPower { mantissa: 0x9a94dd3e8cf578b9, binary_exponent: -458 }, // 5^-170
	CachedPower { mantissa: 0xc13a148e3032d6e7, binary_exponent: -456 }, // 5^-169
	CachedPower { mantissa: 0xf18899b1bc3f8ca1, binary_exponent: -454 }, // 5^-168
	CachedPower { mantissa: 0x96f5600f15a7b7e5, binary_exponent: -451 }, // 5^-167
	CachedPower { mantissa: 0xbcb2b812db11a5de, binary_exponent: -449 }, // 5^-166
	CachedPower { mantissa: 0xebdf661791d60f56, binary_exponent: -447 }, // 5^-165
	CachedPower { mantissa: 0x936b9fcebb25c995, binary_exponent: -444 }, // 5^-164
	CachedPower { mantissa: 0xb84687c269ef3bfb, binary_exponent: -442 }, // 5^-163
	CachedPower { mantissa: 0xe65829b3046b0afa, binary_exponent: -440 }, // 5^-162
	CachedPower { mantissa: 0x8ff71a0fe2c2e6dc, binary_exponent: -437 }, // 5^-161
	CachedPower { mantissa: 0xb3f4e093db73a093, binary_exponent: -435 }, // 5^-160
	CachedPower { mantissa: 0xe0f218b8d25088b8, binary_exponent: -433 }, // 5^-159
	CachedPower { mantissa: 0x8c974f7383725573, binary_exponent: -430 }, // 5^-158
	CachedPower { mantissa: 0xafbd2350644eeacf, binary_exponent: -428 }, // 5^-157
	CachedPower { mantissa: 0xdbac6c247d62a583, binary_exponent: -426 }, // 5^-156
	CachedPower { mantissa: 0x894bc396ce5da772, binary_exponent: -423 }, // 5^-155
	CachedPower { mantissa: 0xab9eb47c81f5114f, binary_exponent: -421 }, // 5^-154
	CachedPower { mantissa: 0xd686619ba27255a2, binary_exponent: -419 }, // 5^-153
	CachedPower { mantissa: 0x8613fd0145877585, binary_exponent: -416 }, // 5^-152
	CachedPower { mantissa: 0xa798fc4196e952e7, binary_exponent: -414 }, // 5^-151
	CachedPower { mantissa: 0xd17f3b51fca3a7a0, binary_exponent: -412 }, // 5^-150
	CachedPower { mantissa: 0x82ef85133de648c4, binary_exponent: -409 }, // 5^-149
	CachedPower { mantissa: 0xa3ab66580d5fdaf5, binary_exponent: -407 }, // 5^-148
	CachedPower { mantissa: 0xcc963fee10b7d1b3, binary_exponent: -405 }, // 5^-147
	CachedPower { mantissa: 0xffbbcfe994e5c61f, binary_exponent: -403 }, // 5^-146
	CachedPower { mantissa: 0x9fd561f1fd0f9bd3, binary_exponent: -400 }, // 5^-145
	CachedPower { mantissa: 0xc7caba6e7c5382c8, binary_exponent: -398 }, // 5^-144
	CachedPower { mantissa: 0xf9bd690a1b68637b, binary_exponent: -396 }, // 5^-143
	CachedPower { mantissa: 0x9c1661a651213e2d, binary_exponent: -393 }, // 5^-142
	CachedPower { mantissa: 0xc31bfa0fe5698db8, binary_exponent: -391 }, // 5^-141
	CachedPower { mantissa: 0xf3e2f893dec3f126, binary_exponent: -389 }, // 5^-140
	CachedPower { mantissa: 0x986ddb5c6b3a76b7, binary_exponent: -386 }, // 5^-139
	CachedPower { mantissa: 0xbe89523386091465, binary_exponent: -384 }, // 5^-138
	CachedPower { mantissa: 0xee2ba6c0678b597f, binary_exponent: -382 }, // 5^-137
	CachedPower { mantissa: 0x94db483840b717ef, binary_exponent: -379 }, // 5^-136
	CachedPower { mantissa: 0xba121a4650e4ddeb, binary_exponent: -377 }, // 5^-135
	CachedPower { mantissa: 0xe896a0d7e51e1566, binary_exponent: -375 }, // 5^-134
	CachedPower { mantissa: 0x915e2486ef32cd60, binary_exponent: -372 }, // 5^-133
	CachedPower { mantissa: 0xb5b5ada8aaff80b8, binary_exponent: -370 }, // 5^-132
	CachedPower { mantissa: 0xe3231912d5bf60e6, binary_exponent: -368 }, // 5^-131
	CachedPower { mantissa: 0x8df5efabc5979c8f, binary_exponent: -365 }, // 5^-130
	CachedPower { mantissa: 0xb1736b96b6fd83b3, binary_exponent: -363 }, // 5^-129
	CachedPower { mantissa: 0xddd0467c64bce4a0, binary_exponent: -361 }, // 5^-128
	CachedPower { mantissa: 0x8aa22c0dbef60ee4, binary_exponent: -358 }, // 5^-127
	CachedPower { mantissa: 0xad4ab7112eb3929d, binary_exponent: -356 }, // 5^-126
	CachedPower { mantissa: 0xd89d64d57a607744, binary_exponent: -354 }, // 5^-125
	CachedPower { mantissa: 0x87625f056c7c4a8b, binary_exponent: -351 }, // 5^-124
	CachedPower { mantissa: 0xa93af6c6c79b5d2d, binary_exponent: -349 }, // 5^-123
	CachedPower { mantissa: 0xd389b47879823479, binary_exponent: -347 }, // 5^-122
	CachedPower { mantissa: 0x843610cb4bf160cb, binary_exponent: -344 }, // 5^-121
	CachedPower { mantissa: 0xa54394fe1eedb8fe, binary_exponent: -342 }, // 5^-120
	CachedPower { mantissa: 0xce947a3da6a9273e, binary_exponent: -340 }, // 5^-119
	CachedPower { mantissa: 0x811ccc668829b887, binary_exponent: -337 }, // 5^-118
	CachedPower { mantissa: 0xa163ff802a3426a8, binary_exponent: -335 }, // 5^-117
	CachedPower { mantissa: 0xc9bcff6034c13052, binary_exponent: -333 }, // 5^-116
	CachedPower { mantissa: 0xfc2c3f3841f17c67, binary_exponent: -331 }, // 5^-115
	CachedPower { mantissa: 0x9d9ba7832936edc0, binary_exponent: -328 }, // 5^-114
	CachedPower { mantissa: 0xc5029163f384a931, binary_exponent: -326 }, // 5^-113
	CachedPower { mantissa: 0xf64335bcf065d37d, binary_exponent: -324 }, // 5^-112
	CachedPower { mantissa: 0x99ea0196163fa42e, binary_exponent: -321 }, // 5^-111
	CachedPower { mantissa: 0xc06481fb9bcf8d39, binary_exponent: -319 }, // 5^-110
	CachedPower { mantissa: 0xf07da27a82c37088, binary_exponent: -317 }, // 5^-109
	CachedPower { mantissa: 0x964e858c91ba2655, binary_exponent: -314 }, // 5^-108
	CachedPower { mantissa: 0xbbe226efb628afea, binary_exponent: -312 }, // 5^-107
	CachedPower { mantissa: 0xeadab0aba3b2dbe5, binary_exponent: -310 }, // 5^-106
	CachedPower { mantissa: 0x92c8ae6b464fc96f, binary_exponent: -307 }, // 5^-105
	CachedPower { mantissa: 0xb77ada0617e3bbcb, binary_exponent: -305 }, // 5^-104
	CachedPower { mantissa: 0xe55990879ddcaabd, binary_exponent: -303 }, // 5^-103
	CachedPower { mantissa: 0x8f57fa54c2a9eab6, binary_exponent: -300 }, // 5^-102
	CachedPower { mantissa: 0xb32df8e9f3546564, binary_exponent: -298 }, // 5^-101
	CachedPower { mantissa: 0xdff9772470297ebd, binary_exponent: -296 }, // 5^-100
	CachedPower { mantissa: 0x8bfbea76c619ef36, binary_exponent: -293 }, // 5^-99
	CachedPower { mantissa: 0xaefae51477a06b03, binary_exponent: -291 }, // 5^-98
	CachedPower { mantissa: 0xdab99e59958885c4, binary_exponent: -289 }, // 5^-97
	CachedPower { mantissa: 0x88b402f7fd75539b, binary_exponent: -286 }, // 5^-96
	CachedPower { mantissa: 0xaae103b5fcd2a881, binary_exponent: -284 }, // 5^-95
	CachedPower { mantissa: 0xd59944a37c0752a2, binary_exponent: -282 }, // 5^-94
	CachedPower { mantissa: 0x857fcae62d8493a5, binary_exponent: -279 }, // 5^-93
	CachedPower { mantissa: 0xa6dfbd9fb8e5b88e, binary_exponent: -277 }, // 5^-92
	CachedPower { mantissa: 0xd097ad07a71f26b2, binary_exponent: -275 }, // 5^-91
	CachedPower { mantissa: 0x825ecc24c873782f, binary_exponent: -272 }, // 5^-90
	CachedPower { mantissa: 0xa2f67f2dfa90563b, binary_exponent: -270 }, // 5^-89
	CachedPower { mantissa: 0xcbb41ef979346bca, binary_exponent: -268 }, // 5^-88
	CachedPower { mantissa: 0xfea126b7d78186bc, binary_exponent: -266 }, // 5^-87
	CachedPower { mantissa: 0x9f24b832e6b0f436, binary_exponent: -263 }, // 5^-86
	CachedPower { mantissa: 0xc6ede63fa05d3143, binary_exponent: -261 }, // 5^-85
	CachedPower { mantissa: 0xf8a95fcf88747d94, binary_exponent: -259 }, // 5^-84
	CachedPower { mantissa: 0x9b69dbe1b548ce7c, binary_exponent: -256 }, // 5^-83
	CachedPower { mantissa: 0xc24452da229b021b, binary_exponent: -254 }, // 5^-82
	CachedPower { mantissa: 0xf2d56790ab41c2a2, binary_exponent: -252 }, // 5^-81
	CachedPower { mantissa: 0x97c560ba6b0919a5, binary_exponent: -249 }, // 5^-80
	CachedPower { mantissa: 0xbdb6b8e905cb600f, binary_exponent: -247 }, // 5^-79
	CachedPower { mantissa: 0xed246723473e3813, binary_exponent: -245 }, // 5^-78
	CachedPower { mantissa: 0x9436c0760c86e30b, binary_exponent: -242 }, // 5^-77
	CachedPower { mantissa: 0xb94470938fa89bce, binary_exponent: -240 }, // 5^-76
	CachedPower { mantissa: 0xe7958cb87392c2c2, binary_exponent: -238 }, // 5^-75
	CachedPower { mantissa: 0x90bd77f3483bb9b9, binary_exponent: -235 }, // 5^-74
	CachedPower { mantissa: 0xb4ecd5f01a4aa828, binary_exponent: -233 }, // 5^-73
	CachedPower { mantissa: 0xe2280b6c20dd5232, binary_exponent: -231 }, // 5^-72
	CachedPower { mantissa: 0x8d590723948a535f, binary_exponent: -228 }, // 5^-71
	CachedPower { mantissa: 0xb0af48ec79ace837, binary_exponent: -226 }, // 5^-70
	CachedPower { mantissa: 0xdcdb1b2798182244, binary_exponent: -224 }, // 5^-69
	CachedPower { mantissa: 0x8a08f0f8bf0f156b, binary_exponent: -221 }, // 5^-68
	CachedPower { mantissa: 0xac8b2d36eed2dac5, binary_exponent: -219 }, // 5^-67
	CachedPower { mantissa: 0xd7adf884aa879177, binary_exponent: -217 }, // 5^-66
	CachedPower { mantissa: 0x86ccbb52ea94baea, binary_exponent: -214 }, // 5^-65
	CachedPower { mantissa: 0xa87fea27a539e9a5, binary_exponent: -212 }, // 5^-64
	CachedPower { mantissa: 0xd29fe4b18e88640e, binary_exponent: -210 }, // 5^-63
	CachedPower { mantissa: 0x83a3eeeef9153e89, binary_exponent: -207 }, // 5^-62
	CachedPower { mantissa: 0xa48ceaaab75a8e2b, binary_exponent: -205 }, // 5^-61
	CachedPower { mantissa: 0xcdb02555653131b6, binary_exponent: -203 }, // 5^-60
	CachedPower { mantissa: 0x808e17555f3ebf11, binary_exponent: -200 }, // 5^-59
	CachedPower { mantissa: 0xa0b19d2ab70e6ed6, binary_exponent: -198 }, // 5^-58
	CachedPower { mantissa: 0xc8de047564d20a8b, binary_exponent: -196 }, // 5^-57
	CachedPower { mantissa: 0xfb158592be068d2e, binary_exponent: -194 }, // 5^-56
	CachedPower { mantissa: 0x9ced737bb6c4183d, binary_exponent: -191 }, // 5^-55
	CachedPower { mantissa: 0xc428d05aa4751e4c, binary_exponent: -189 }, // 5^-54
	CachedPower { mantissa: 0xf53304714d9265df, binary_exponent: -187 }, // 5^-53
	CachedPower { mantissa: 0x993fe2c6d07b7fab, binary_exponent: -184 }, // 5^-52
	CachedPower { mantissa: 0xbf8fdb78849a5f96, binary_exponent: -182 }, // 5^-51
	CachedPower { mantissa: 0xef73d256a5c0f77c, binary_exponent: -180 }, // 5^-50
	CachedPower { mantissa: 0x95a8637627989aad, binary_exponent: -177 }, // 5^-49
	CachedPower { mantissa: 0xbb127c53b17ec159, binary_exponent: -175 }, // 5^-48
	CachedPower { mantissa: 0xe9d71b689dde71af, binary_exponent: -173 }, // 5^-47
	CachedPower { mantissa: 0x9226712162ab070d, binary_exponent: -170 }, // 5^-46
	CachedPower { mantissa: 0xb6b00d69bb55c8d1, binary_exponent: -168 }, // 5^-45
	CachedPower { mantissa: 0xe45c10c42a2b3b05, binary_exponent: -166 }, // 5^-44
	CachedPower { mantissa: 0x8eb98a7a9a5b04e3, binary_exponent: -163 }, // 5^-43
	CachedPower { mantissa: 0xb267ed1940f1c61c, binary_exponent: -161 }, // 5^-42
	CachedPower { mantissa: 0xdf01e85f912e37a3, binary_exponent: -159 }, // 5^-41
	CachedPower { mantissa: 0x8b61313bbabce2c6, binary_exponent: -156 }, // 5^-40
	CachedPower { mantissa: 0xae397d8aa96c1b77, binary_exponent: -154 }, // 5^-39
	CachedPower { mantissa: 0xd9c7dced53c72255, binary_exponent: -152 }, // 5^-38
	CachedPower { mantissa: 0x881cea14545c7575, binary_exponent: -149 }, // 5^-37
	CachedPower { mantissa: 0xaa242499697392d2, binary_exponent: -147 }, // 5^-36
	CachedPower { mantissa: 0xd4ad2dbfc3d07787, binary_exponent: -145 }, // 5^-35
	CachedPower { mantissa: 0x84ec3c97da624ab4, binary_exponent: -142 }, // 5^-34
	CachedPower { mantissa: 0xa6274bbdd0fadd61, binary_exponent: -140 }, // 5^-33
	CachedPower { mantissa: 0xcfb11ead453994ba, binary_exponent: -138 }, // 5^-32
	CachedPower { mantissa: 0x81ceb32c4b43fcf4, binary_exponent: -135 }, // 5^-31
	CachedPower { mantissa: 0xa2425ff75e14fc31, binary_exponent: -133 }, // 5^-30
	CachedPower { mantissa: 0xcad2f7f5359a3b3e, binary_exponent: -131 }, // 5^-29
	CachedPower { mantissa: 0xfd87b5f28300ca0d, binary_exponent: -129 }, // 5^-28
	CachedPower { mantissa: 0x9e74d1b791e07e48, binary_exponent: -126 }, // 5^-27
	CachedPower { mantissa: 0xc612062576589dda, binary_exponent: -124 }, // 5^-26
	CachedPower { mantissa: 0xf79687aed3eec551, binary_exponent: -122 }, // 5^-25
	CachedPower { mantissa: 0x9abe14cd44753b52, binary_exponent: -119 }, // 5^-24
	CachedPower { mantissa: 0xc16d9a0095928a27, binary_exponent: -117 }, // 5^-23
	CachedPower { mantissa: 0xf1c90080baf72cb1, binary_exponent: -115 }, // 5^-22
	CachedPower { mantissa: 0x971da05074da7bee, binary_exponent: -112 }, // 5^-21
	CachedPower { mantissa: 0xbce5086492111aea, binary_exponent: -110 }, // 5^-20
	CachedPower { mantissa: 0xec1e4a7db69561a5, binary_exponent: -108 }, // 5^-19
	CachedPower { mantissa: 0x9392ee8e921d5d07, binary_exponent: -105 }, // 5^-18
	CachedPower { mantissa: 0xb877aa3236a4b449, binary_exponent: -103 }, // 5^-17
	CachedPower { mantissa: 0xe69594bec44de15b, binary_exponent: -101 }, // 5^-16
	CachedPower { mantissa: 0x901d7cf73ab0acd9, binary_exponent: -98 }, // 5^-15
	CachedPower { mantissa: 0xb424dc35095cd80f, binary_exponent: -96 }, // 5^-14
	CachedPower { mantissa: 0xe12e13424bb40e13, binary_exponent: -94 }, // 5^-13
	CachedPower { mantissa: 0x8cbccc096f5088cb, binary_exponent: -91 }, // 5^-12
	CachedPower { mantissa: 0xafebff0bcb24aafe, binary_exponent: -89 }, // 5^-11
	CachedPower { mantissa: 0xdbe6fecebdedd5be, binary_exponent: -87 }, // 5^-10
	CachedPower { mantissa: 0x89705f4136b4a597, binary_exponent: -84 }, // 5^-9
	CachedPower { mantissa: 0xabcc77118461cefc, binary_exponent: -82 }, // 5^-8
	CachedPower { mantissa: 0xd6bf94d5e57a42bc, binary_exponent: -80 }, // 5^-7
	CachedPower { mantissa: 0x8637bd05af6c69b5, binary_exponent: -77 }, // 5^-6
	CachedPower { mantissa: 0xa7c5ac471b478423, binary_exponent: -75 }, // 5^-5
	CachedPower { mantissa: 0xd1b71758e219652b, binary_exponent: -73 }, // 5^-4
	CachedPower { mantissa: 0x83126e978d4fdf3b, binary_exponent: -70 }, // 5^-3
	CachedPower { mantissa: 0xa3d70a3d70a3d70a, binary_exponent: -68 }, // 5^-2
	CachedPower { mantissa: 0xcccccccccccccccc, binary_exponent: -66 }, // 5^-1
	CachedPower { mantissa: 0x8000000000000000, binary_exponent: -63 }, // 5^0
	CachedPower { mantissa: 0xa000000000000000, binary_exponent: -61 }, // 5^1
	CachedPower { mantissa: 0xc800000000000000, binary_exponent: -59 }, // 5^2
	CachedPower { mantissa: 0xfa00000000000000, binary_exponent: -57 }, // 5^3
	CachedPower { mantissa: 0x9c40000000000000, binary_exponent: -54 }, // 5^4
	CachedPower { mantissa: 0xc350000000000000, binary_exponent: -52 }, // 5^5
	CachedPower { mantissa: 0xf424000000000000, binary_exponent: -50 }, // 5^6
	CachedPower { mantissa: 0x9896800000000000, binary_exponent: -47 }, // 5^7
	CachedPower { mantissa: 0xbebc200000000000, binary_exponent: -45 }, // 5^8
	CachedPower { mantissa: 0xee6b280000000000, binary_exponent: -43 }, // 5^9
	CachedPower { mantissa: 0x9502f90000000000, binary_exponent: -40 }, // 5^10
	CachedPower { mantissa: 0xba43b74000000000, binary_exponent: -38 }, // 5^11
	CachedPower { mantissa: 0xe8d4a51000000000, binary_exponent: -36 }, // 5^12
	CachedPower { mantissa: 0x9184e72a00000000, binary_exponent: -33 }, // 5^13
	CachedPower { mantissa: 0xb5e620f480000000, binary_exponent: -31 }, // 5^14
	CachedPower { mantissa: 0xe35fa931a0000000, binary_exponent: -29 }, // 5^15
	CachedPower { mantissa: 0x8e1bc9bf04000000, binary_exponent: -26 }, // 5^16
	CachedPower { mantissa: 0xb1a2bc2ec5000000, binary_exponent: -24 }, // 5^17
	CachedPower { mantissa: 0xde0b6b3a76400000, binary_exponent: -22 }, // 5^18
	CachedPower { mantissa: 0x8ac7230489e80000, binary_exponent: -19 }, // 5^19
	CachedPower { mantissa: 0xad78ebc5ac620000, binary_exponent: -17 }, // 5^20
	CachedPower { mantissa: 0xd8d726b7177a8000, binary_exponent: -15 }, // 5^21
	CachedPower { mantissa: 0x878678326eac9000, binary_exponent: -12 }, // 5^22
	CachedPower { mantissa: 0xa968163f0a57b400, binary_exponent: -10 }, // 5^23
	CachedPower { mantissa: 0xd3c21bcecceda100, binary_exponent: -8 }, // 5^24
	CachedPower { mantissa: 0x84595161401484a0, binary_exponent: -5 }, // 5^25
	CachedPower { mantissa: 0xa56fa5b99019a5c8, binary_exponent: -3 }, // 5^26
	CachedPower { mantissa: 0xcecb8f27f4200f3a, binary_exponent: -1 }, // 5^27
	CachedPower { mantissa: 0x813f3978f8940984, binary_exponent: 2 }, // 5^28
	CachedPower { mantissa: 0xa18f07d736b90be5, binary_exponent: 4 }, // 5^29
	CachedPower { mantissa: 0xc9f2c9cd04674ede, binary_exponent: 6 }, // 5^30
	CachedPower { mantissa: 0xfc6f7c4045812296, binary_exponent: 8 }, // 5^31
	CachedPower { mantissa: 0x9dc5ada82b70b59d, binary_exponent: 11 }, // 5^32
	CachedPower { mantissa: 0xc5371912364ce305, binary_exponent: 13 }, // 5^33
	CachedPower { mantissa: 0xf684df56c3e01bc6, binary_exponent: 15 }, // 5^34
	CachedPower { mantissa: 0x9a130b963a6c115c, binary_exponent: 18 }, // 5^35
	CachedPower { mantissa: 0xc097ce7bc90715b3, binary_exponent: 20 }, // 5^36
	CachedPower { mantissa: 0xf0bdc21abb48db20, binary_exponent: 22 }, // 5^37
	CachedPower { mantissa: 0x96769950b50d88f4, binary_exponent: 25 }, // 5^38
	CachedPower { mantissa: 0xbc143fa4e250eb31, binary_exponent: 27 }, // 5^39
	CachedPower { mantissa: 0xeb194f8e1ae525fd, binary_exponent: 29 }, // 5^40
	CachedPower { mantissa: 0x92efd1b8d0cf37be, binary_exponent: 32 }, // 5^41
	CachedPower { mantissa: 0xb7abc627050305ad, binary_exponent: 34 }, // 5^42
	CachedPower { mantissa: 0xe596b7b0c643c719, binary_exponent: 36 }, // 5^43
	CachedPower { mantissa: 0x8f7e32ce7bea5c6f, binary_exponent: 39 }, // 5^44
	CachedPower { mantissa: 0xb35dbf821ae4f38b, binary_exponent: 41 }, // 5^45
	CachedPower { mantissa: 0xe0352f62a19e306e, binary_exponent: 43 }, // 5^46
	CachedPower { mantissa: 0x8c213d9da502de45, binary_exponent: 46 }, // 5^47
	CachedPower { mantissa: 0xaf298d050e4395d6, binary_exponent: 48 }, // 5^48
	CachedPower { mantissa: 0xdaf3f04651d47b4c, binary_exponent: 50 }, // 5^49
	CachedPower { mantissa: 0x88d8762bf324cd0f, binary_exponent: 53 }, // 5^50
	CachedPower { mantissa: 0xab0e93b6efee0053, binary_exponent: 55 }, // 5^51
	CachedPower { mantissa: 0xd5d238a4abe98068, binary_exponent: 57 }, // 5^52
	CachedPower { mantissa: 0x85a36366eb71f041, binary_exponent: 60 }, // 5^53
	CachedPower { mantissa: 0xa70c3c40a64e6c51, binary_exponent: 62 }, // 5^54
	CachedPower { mantissa: 0xd0cf4b50cfe20765, binary_exponent: 64 }, // 5^55
	CachedPower { mantissa: 0x82818f1281ed449f, binary_exponent: 67 }, // 5^56
	CachedPower { mantissa: 0xa321f2d7226895c7, binary_exponent: 69 }, // 5^57
	CachedPower { mantissa: 0xcbea6f8ceb02bb39, binary_exponent: 71 }, // 5^58
	CachedPower { mantissa: 0xfee50b7025c36a08, binary_exponent: 73 }, // 5^59
	CachedPower { mantissa: 0x9f4f2726179a2245, binary_exponent: 76 }, // 5^60
	CachedPower { mantissa: 0xc722f0ef9d80aad6, binary_exponent: 78 }, // 5^61
	CachedPower { mantissa: 0xf8ebad2b84e0d58b, binary_exponent: 80 }, // 5^62
	CachedPower { mantissa: 0x9b934c3b330c8577, binary_exponent: 83 }, // 5^63
	CachedPower { mantissa: 0xc2781f49ffcfa6d5, binary_exponent: 85 }, // 5^64
	CachedPower { mantissa: 0xf316271c7fc3908a, binary_exponent: 87 }, // 5^65
	CachedPower { mantissa: 0x97edd871cfda3a56, binary_exponent: 90 }, // 5^66
	CachedPower { mantissa: 0xbde94e8e43d0c8ec, binary_exponent: 92 }, // 5^67
	CachedPower { mantissa: 0xed63a231d4c4fb27, binary_exponent: 94 }, // 5^68
	CachedPower { mantissa: 0x945e455f24fb1cf8, binary_exponent: 97 }, // 5^69
	CachedPower { mantissa: 0xb975d6b6ee39e436, binary_exponent: 99 }, // 5^70
	CachedPower { mantissa: 0xe7d34c64a9c85d44, binary_exponent: 101 }, // 5^71
	CachedPower { mantissa: 0x90e40fbeea1d3a4a, binary_exponent: 104 }, // 5^72
	CachedPower { mantissa: 0xb51d13aea4a488dd, binary_exponent: 106 }, // 5^73
	CachedPower { mantissa: 0xe264589a4dcdab14, binary_exponent: 108 }, // 5^74
	CachedPower { mantissa: 0x8d7eb76070a08aec, binary_exponent: 111 }, // 5^75
	CachedPower { mantissa: 0xb0de65388cc8ada8, binary_exponent: 113 }, // 5^76
	CachedPower { mantissa: 0xdd15fe86affad912, binary_exponent: 115 }, // 5^77
	CachedPower { mantissa: 0x8a2dbf142dfcc7ab, binary_exponent: 118 }, // 5^78
	CachedPower { mantissa: 0xacb92ed9397bf996, binary_exponent: 120 }, // 5^79
	CachedPower { mantissa: 0xd7e77a8f87daf7fb, binary_exponent: 122 }, // 5^80
	CachedPower { mantissa: 0x86f0ac99b4e8dafd, binary_exponent: 125 }, // 5^81
	CachedPower { mantissa: 0xa8acd7c0222311bc, binary_exponent: 127 }, // 5^82
	CachedPower { mantissa: 0xd2d80db02aabd62b, binary_exponent: 129 }, // 5^83
	CachedPower { mantissa: 0x83c7088e1aab65db, binary_exponent: 132 }, // 5^84
	CachedPower { mantissa: 0xa4b8cab1a1563f52, binary_exponent: 134 }, // 5^85
	CachedPower { mantissa: 0xcde6fd5e09abcf26, binary_exponent: 136 }, // 5^86
	CachedPower { mantissa: 0x80b05e5ac60b6178, binary_exponent: 139 }, // 5^87
	CachedPower { mantissa: 0xa0dc75f1778e39d6, binary_exponent: 141 }, // 5^88
	CachedPower { mantissa: 0xc913936dd571c84c, binary_exponent: 143 }, // 5^89
	CachedPower { mantissa: 0xfb5878494ace3a5f, binary_exponent: 145 }, // 5^90
	CachedPower { mantissa: 0x9d174b2dcec0e47b, binary_exponent: 148 }, // 5^91
	CachedPower { mantissa: 0xc45d1df942711d9a, binary_exponent: 150 }, // 5^92
	CachedPower { mantissa: 0xf5746577930d6500, binary_exponent: 152 }, // 5^93
	CachedPower { mantissa: 0x9968bf6abbe85f20, binary_exponent: 155 }, // 5^94
	CachedPower { mantissa: 0xbfc2ef456ae276e8, binary_exponent: 157 }, // 5^95
	CachedPower { mantissa: 0xefb3ab16c59b14a2, binary_exponent: 159 }, // 5^96
	CachedPower { mantissa: 0x95d04aee3b80ece5, binary_exponent: 162 }, // 5^97
	CachedPower { mantissa: 0xbb445da9ca61281f, binary_exponent: 164 }, // 5^98
	CachedPower { mantissa: 0xea1575143cf97226, binary_exponent: 166 }, // 5^99
	CachedPower { mantissa: 0x924d692ca61be758, binary_exponent: 169 }, // 5^100
	CachedPower { mantissa: 0xb6e0c377cfa2e12e, binary_exponent: 171 }, // 5^101
	CachedPower { mantissa: 0xe498f455c38b997a, binary_exponent: 173 }, // 5^102
	CachedPower { mantissa: 0x8edf98b59a373fec, binary_exponent: 176 }, // 5^103
	CachedPower { mantissa: 0xb2977ee300c50fe7, binary_exponent: 178 }, // 5^104
	CachedPower { mantissa: 0xdf3d5e9bc0f653e1, binary_exponent: 180 }, // 5^105
	CachedPower { mantissa: 0x8b865b215899f46c, binary_exponent: 183 }, // 5^106
	CachedPower { mantissa: 0xae67f1e9aec07187, binary_exponent: 185 }, // 5^107
	CachedPower { mantissa: 0xda01ee641a708de9, binary_exponent: 187 }, // 5^108
	CachedPower { mantissa: 0x884134fe908658b2, binary_exponent: 190 }, // 5^109
	CachedPower { mantissa: 0xaa51823e34a7eede, binary_exponent: 192 }, // 5^110
	CachedPower { mantissa: 0xd4e5e2cdc1d1ea96, binary_exponent: 194 }, // 5^111
	CachedPower { mantissa: 0x850fadc09923329e, binary_exponent: 197 }, // 5^112
	CachedPower { mantissa: 0xa6539930bf6bff45, binary_exponent: 199 }, // 5^113
	CachedPower { mantissa: 0xcfe87f7cef46ff16, binary_exponent: 201 }, // 5^114
	CachedPower { mantissa: 0x81f14fae158c5f6e, binary_exponent: 204 }, // 5^115
	CachedPower { mantissa: 0xa26da3999aef7749, binary_exponent: 206 }, // 5^116
	CachedPower { mantissa: 0xcb090c8001ab551c, binary_exponent: 208 }, // 5^117
	CachedPower { mantissa: 0xfdcb4fa002162a63, binary_exponent: 210 }, // 5^118
	CachedPower { mantissa: 0x9e9f11c4014dda7e, binary_exponent: 213 }, // 5^119
	CachedPower { mantissa: 0xc646d63501a1511d, binary_exponent: 215 }, // 5^120
	CachedPower { mantissa: 0xf7d88bc24209a565, binary_exponent: 217 }, // 5^121
	CachedPower { mantissa: 0x9ae757596946075f, binary_exponent: 220 }, // 5^122
	CachedPower { mantissa: 0xc1a12d2fc3978937, binary_exponent: 222 }, // 5^123
	CachedPower { mantissa: 0xf209787bb47d6b84, binary_exponent: 224 }, // 5^124
	CachedPower { mantissa: 0x9745eb4d50ce6332, binary_exponent: 227 }, // 5^125
	CachedPower { mantissa: 0xbd176620a501fbff, binary_exponent: 229 }, // 5^126
	CachedPower { mantissa: 0xec5d3fa8ce427aff, binary_exponent: 231 }, // 5^127
	CachedPower { mantissa: 0x93ba47c980e98cdf, binary_exponent: 234 }, // 5^128
	CachedPower { mantissa: 0xb8a8d9bbe123f017, binary_exponent: 236 }, // 5^129
	CachedPower { mantissa: 0xe6d3102ad96cec1d, binary_exponent: 238 }, // 5^130
	CachedPower { mantissa: 0x9043ea1ac7e41392, binary_exponent: 241 }, // 5^131
	CachedPower { mantissa: 0xb454e4a179dd1877, binary_exponent: 243 }, // 5^132
	CachedPower { mantissa: 0xe16a1dc9d8545e94, binary_exponent: 245 }, // 5^133
	CachedPower { mantissa: 0x8ce2529e2734bb1d, binary_exponent: 248 }, // 5^134
	CachedPower { mantissa: 0xb01ae745b101e9e4, binary_exponent: 250 }, // 5^135
	CachedPower { mantissa: 0xdc21a1171d42645d, binary_exponent: 252 }, // 5^136
	CachedPower { mantissa: 0x899504ae72497eba, binary_exponent: 255 }, // 5^137
	CachedPower { mantissa: 0xabfa45da0edbde69, binary_exponent: 257 }, // 5^138
	CachedPower { mantissa: 0xd6f8d7509292d603, binary_exponent: 259 }, // 5^139
	CachedPower { mantissa: 0x865b86925b9bc5c2, binary_exponent: 262 }, // 5^140
	CachedPower { mantissa: 0xa7f26836f282b732, binary_exponent: 264 }, // 5^141
	CachedPower { mantissa: 0xd1ef0244af2364ff, binary_exponent: 266 }, // 5^142
	CachedPower { mantissa: 0x8335616aed761f1f, binary_exponent: 269 }, // 5^143
	CachedPower { mantissa: 0xa402b9c5a8d3a6e7, binary_exponent: 271 }, // 5^144
	CachedPower { mantissa: 0xcd036837130890a1, binary_exponent: 273 }, // 5^145
	CachedPower { mantissa: 0x802221226be55a64, binary_exponent: 276 }, // 5^146
	CachedPower { mantissa: 0xa02aa96b06deb0fd, binary_exponent: 278 }, // 5^147
	CachedPower { mantissa: 0xc83553c5c8965d3d, binary_exponent: 280 }, // 5^148
	CachedPower { mantissa: 0xfa42a8b73abbf48c, binary_exponent: 282 }, // 5^149
	CachedPower { mantissa: 0x9c69a97284b578d7, binary_exponent: 285 }, // 5^150
	CachedPower { mantissa: 0xc38413cf25e2d70d, binary_exponent: 287 }, // 5^151
	CachedPower { mantissa: 0xf46518c2ef5b8cd1, binary_exponent: 289 }, // 5^152
	CachedPower { mantissa: 0x98bf2f79d5993802, binary_exponent: 292 }, // 5^153
	CachedPower { mantissa: 0xbeeefb584aff8603, binary_exponent: 294 }, // 5^154
	CachedPower { mantissa: 0xeeaaba2e5dbf6784, binary_exponent: 296 }, // 5^155
	CachedPower { mantissa: 0x952ab45cfa97a0b2, binary_exponent: 299 }, // 5^156
	CachedPower { mantissa: 0xba756174393d88df, binary_exponent: 301 }, // 5^157
	CachedPower { mantissa: 0xe912b9d1478ceb17, binary_exponent: 303 }, // 5^158
	CachedPower { mantissa: 0x91abb422ccb812ee, binary_exponent: 306 }, // 5^159
	CachedPower { mantissa: 0xb616a12b7fe617aa, binary_exponent: 308 }, // 5^160
	CachedPower { mantissa: 0xe39c49765fdf9d94, binary_exponent: 310 }, // 5^161
	CachedPower { mantissa: 0x8e41ade9fbebc27d, binary_exponent: 313 }, // 5^162
	CachedPower { mantissa: 0xb1d219647ae6b31c, binary_exponent: 315 }, // 5^163
	CachedPower { mantissa: 0xde469fbd99a05fe3, binary_exponent: 317 }, // 5^164
	CachedPower { mantissa: 0x8aec23d680043bee, binary_exponent: 320 }, // 5^165
	CachedPower { mantissa: 0xada72ccc20054ae9, binary_exponent: 322 }, // 5^166
	CachedPower { mantissa: 0xd910f7ff28069da4, binary_exponent: 324 }, // 5^167
	CachedPower { mantissa: 0x87aa9aff79042286, binary_exponent: 327 }, // 5^168
	CachedPower { mantissa: 0xa99541bf57452b28, binary_exponent: 329 }, // 5^169
	CachedPower { mantissa: 0xd3fa922f2d1675f2, binary_exponent: 331 }, // 5^170
	CachedPower { mantissa: 0x847c9b5d7c2e09b7, binary_exponent: 334 }, // 5^171
	CachedPower { mantissa: 0xa59bc234db398c25, binary_exponent: 336 }, // 5^172
	CachedPower { mantissa: 0xcf02b2c21207ef2e, binary_exponent: 338 }, // 5^173
	CachedPower { mantissa: 0x8161afb94b44f57d, binary_exponent: 341 }, // 5^174
	CachedPower { mantissa: 0xa1ba1ba79e1632dc, binary_exponent: 343 }, // 5^175
	CachedPower { mantissa: 0xca28a291859bbf93, binary_exponent: 345 }, // 5^176
	CachedPower { mantissa: 0xfcb2cb35e702af78, binary_exponent: 347 }, // 5^177
	CachedPower { mantissa: 0x9defbf01b061adab, binary_exponent: 350 }, // 5^178
	CachedPower { mantissa: 0xc56baec21c7a1916, binary_exponent: 352 }, // 5^179
	CachedPower { mantissa: 0xf6c69a72a3989f5b, binary_exponent: 354 }, // 5^180
	CachedPower { mantissa: 0x9a3c2087a63f6399, binary_exponent: 357 }, // 5^181
	CachedPower { mantissa: 0xc0cb28a98fcf3c7f, binary_exponent: 359 }, // 5^182
	CachedPower { mantissa: 0xf0fdf2d3f3c30b9f, binary_exponent: 361 }, // 5^183
	CachedPower { mantissa: 0x969eb7c47859e743, binary_exponent: 364 }, // 5^184
	CachedPower { mantissa: 0xbc4665b596706114, binary_exponent: 366 }, // 5^185
	CachedPower { mantissa: 0xeb57ff22fc0c7959, binary_exponent: 368 }, // 5^186
	CachedPower { mantissa: 0x9316ff75dd87cbd8, binary_exponent: 371 }, // 5^187
	CachedPower { mantissa: 0xb7dcbf5354e9bece, binary_exponent: 373 }, // 5^188
	CachedPower { mantissa: 0xe5d3ef282a242e81, binary_exponent: 375 }, // 5^189
	CachedPower { mantissa: 0x8fa475791a569d10, binary_exponent: 378 }, // 5^190
	CachedPower { mantissa: 0xb38d92d760ec4455, binary_exponent: 380 }, // 5^191
	CachedPower { mantissa: 0xe070f78d3927556a, binary_exponent: 382 }, // 5^192
	CachedPower { mantissa: 0x8c469ab843b89562, binary_exponent: 385 }, // 5^193
	CachedPower { mantissa: 0xaf58416654a6babb, binary_exponent: 387 }, // 5^194
	CachedPower { mantissa: 0xdb2e51bfe9d0696a, binary_exponent: 389 }, // 5^195
	CachedPower { mantissa: 0x88fcf317f22241e2, binary_exponent: 392 }, // 5^196
	CachedPower { mantissa: 0xab3c2fddeeaad25a, binary_exponent: 394 }, // 5^197
	CachedPower { mantissa: 0xd60b3bd56a5586f1, binary_exponent: 396 }, // 5^198
	CachedPower { mantissa: 0x85c7056562757456, binary_exponent: 399 }, // 5^199
	CachedPower { mantissa: 0xa738c6bebb12d16c, binary_exponent: 401 }, // 5^200
	CachedPower { mantissa: 0xd106f86e69d785c7, binary_exponent: 403 }, // 5^201
	CachedPower { mantissa: 0x82a45b450226b39c, binary_exponent: 406 }, // 5^202
	CachedPower { mantissa: 0xa34d721642b06084, binary_exponent: 408 }, // 5^203
	CachedPower { mantissa: 0xcc20ce9bd35c78a5, binary_exponent: 410 }, // 5^204
	CachedPower { mantissa: 0xff290242c83396ce, binary_exponent: 412 }, // 5^205
	CachedPower { mantissa: 0x9f79a169bd203e41, binary_exponent: 415 }, // 5^206
	CachedPower { mantissa: 0xc75809c42c684dd1, binary_exponent: 417 }, // 5^207
	CachedPower { mantissa: 0xf92e0c3537826145, binary_exponent: 419 }, // 5^208
	CachedPower { mantissa: 0x9bbcc7a142b17ccb, binary_exponent: 422 }, // 5^209
	CachedPower { mantissa: 0xc2abf989935ddbfe, binary_exponent: 424 }, // 5^210
	CachedPower { mantissa: 0xf356f7ebf83552fe, binary_exponent: 426 }, // 5^211
	CachedPower { mantissa: 0x98165af37b2153de, binary_exponent: 429 }, // 5^212
	CachedPower { mantissa: 0xbe1bf1b059e9a8d6, binary_exponent: 431 }, // 5^213
	CachedPower { mantissa: 0xeda2ee1c7064130c, binary_exponent: 433 }, // 5^214
	CachedPower { mantissa: 0x9485d4d1c63e8be7, binary_exponent: 436 }, // 5^215
	CachedPower { mantissa: 0xb9a74a0637ce2ee1, binary_exponent: 438 }, // 5^216
	CachedPower { mantissa: 0xe8111c87c5c1ba99, binary_exponent: 440 }, // 5^217
	CachedPower { mantissa: 0x910ab1d4db9914a0, binary_exponent: 443 }, // 5^218
	CachedPower { mantissa: 0xb54d5e4a127f59c8, binary_exponent: 445 }, // 5^219
	CachedPower { mantissa: 0xe2a0b5dc971f303a, binary_exponent: 447 }, // 5^220
	CachedPower { mantissa: 0x8da471a9de737e24, binary_exponent: 450 }, // 5^221
	CachedPower { mantissa: 0xb10d8e1456105dad, binary_exponent: 452 }, // 5^222
	CachedPower { mantissa: 0xdd50f1996b947518, binary_exponent: 454 }, // 5^223
	CachedPower { mantissa: 0x8a5296ffe33cc92f, binary_exponent: 457 }, // 5^224
	CachedPower { mantissa: 0xace73cbfdc0bfb7b, binary_exponent: 459 }, // 5^225
	CachedPower { mantissa: 0xd8210befd30efa5a, binary_exponent: 461 }, // 5^226
	CachedPower { mantissa: 0x8714a775e3e95c78, binary_exponent: 464 }, // 5^227
	CachedPower { mantissa: 0xa8d9d1535ce3b396, binary_exponent: 466 }, // 5^228
	CachedPower { mantissa: 0xd31045a8341ca07c, binary_exponent: 468 }, // 5^229
	CachedPower { mantissa: 0x83ea2b892091e44d, binary_exponent: 471 }, // 5^230
	CachedPower { mantissa: 0xa4e4b66b68b65d60, binary_exponent: 473 }, // 5^231
	CachedPower { mantissa: 0xce1de40642e3f4b9, binary_exponent: 475 }, // 5^232
	CachedPower { mantissa: 0x80d2ae83e9ce78f3, binary_exponent: 478 }, // 5^233
	CachedPower { mantissa: 0xa1075a24e4421730, binary_exponent: 480 }, // 5^234
	CachedPower { mantissa: 0xc94930ae1d529cfc, binary_exponent: 482 }, // 5^235
	CachedPower { mantissa: 0xfb9b7cd9a4a7443c, binary_exponent: 484 }, // 5^236
	CachedPower { mantissa: 0x9d412e0806e88aa5, binary_exponent: 487 }, // 5^237
	CachedPower { mantissa: 0xc491798a08a2ad4e, binary_exponent: 489 }, // 5^238
	CachedPower { mantissa: 0xf5b5d7ec8acb58a2, binary_exponent: 491 }, // 5^239
	CachedPower { mantissa: 0x9991a6f3d6bf1765, binary_exponent: 494 }, // 5^240
	CachedPower { mantissa: 0xbff610b0cc6edd3f, binary_exponent: 496 }, // 5^241
	CachedPower { mantissa: 0xeff394dcff8a948e, binary_exponent: 498 }, // 5^242
	CachedPower { mantissa: 0x95f83d0a1fb69cd9, binary_exponent: 501 }, // 5^243
	CachedPower { mantissa: 0xbb764c4ca7a4440f, binary_exponent: 503 }, // 5^244
	CachedPower { mantissa: 0xea53df5fd18d5513, binary_exponent: 505 }, // 5^245
	CachedPower { mantissa: 0x92746b9be2f8552c, binary_exponent: 508 }, // 5^246
	CachedPower { mantissa: 0xb7118682dbb66a77, binary_exponent: 510 }, // 5^247
	CachedPower { mantissa: 0xe4d5e82392a40515, binary_exponent: 512 }, // 5^248
	CachedPower { mantissa: 0x8f05b1163ba6832d, binary_exponent: 515 }, // 5^249
	CachedPower { mantissa: 0xb2c71d5bca9023f8, binary_exponent: 517 }, // 5^250
	CachedPower { mantissa: 0xdf78e4b2bd342cf6, binary_exponent: 519 }, // 5^251
	CachedPower { mantissa: 0x8bab8eefb6409c1a, binary_exponent: 522 }, // 5^252
	CachedPower { mantissa: 0xae9672aba3d0c320, binary_exponent: 524 }, // 5^253
	CachedPower { mantissa: 0xda3c0f568cc4f3e8, binary_exponent: 526 }, // 5^254
	CachedPower { mantissa: 0x8865899617fb1871, binary_exponent: 529 }, // 5^255
	CachedPower { mantissa: 0xaa7eebfb9df9de8d, binary_exponent: 531 }, // 5^256
	CachedPower { mantissa: 0xd51ea6fa85785631, binary_exponent: 533 }, // 5^257
	CachedPower { mantissa: 0x8533285c936b35de, binary_exponent: 536 }, // 5^258
	CachedPower { mantissa: 0xa67ff273b8460356, binary_exponent: 538 }, // 5^259
	CachedPower { mantissa: 0xd01fef10a657842c, binary_exponent: 540 }, // 5^260
	CachedPower { mantissa: 0x8213f56a67f6b29b, binary_exponent: 543 }, // 5^261
	CachedPower { mantissa: 0xa298f2c501f45f42, binary_exponent: 545 }, // 5^262
	CachedPower { mantissa: 0xcb3f2f7642717713, binary_exponent: 547 }, // 5^263
	CachedPower { mantissa: 0xfe0efb53d30dd4d7, binary_exponent: 549 }, // 5^264
	CachedPower { mantissa: 0x9ec95d1463e8a506, binary_exponent: 552 }, // 5^265
	CachedPower { mantissa: 0xc67bb4597ce2ce48, binary_exponent: 554 }, // 5^266
	CachedPower { mantissa: 0xf81aa16fdc1b81da, binary_exponent: 556 }, // 5^267
	CachedPower { mantissa: 0x9b10a4e5e9913128, binary_exponent: 559 }, // 5^268
	CachedPower { mantissa: 0xc1d4ce1f63f57d72, binary_exponent: 561 }, // 5^269
	CachedPower { mantissa: 0xf24a01a73cf2dccf, binary_exponent: 563 }, // 5^270
	CachedPower { mantissa: 0x976e41088617ca01, binary_exponent: 566 }, // 5^271
	CachedPower { mantissa: 0xbd49d14aa79dbc82, binary_exponent: 568 }, // 5^272
	CachedPower { mantissa: 0xec9c459d51852ba2, binary_exponent: 570 }, // 5^273
	CachedPower { mantissa: 0x93e1ab8252f33b45, binary_exponent: 573 }, // 5^274
	CachedPower { mantissa: 0xb8da1662e7b00a17, binary_exponent: 575 }, // 5^275
	CachedPower { mantissa: 0xe7109bfba19c0c9d, binary_exponent: 577 }, // 5^276
	CachedPower { mantissa: 0x906a617d450187e2, binary_exponent: 580 }, // 5^277
	CachedPower { mantissa: 0xb484f9dc9641e9da, binary_exponent: 582 }, // 5^278
	CachedPower { mantissa: 0xe1a63853bbd26451, binary_exponent: 584 }, // 5^279
	CachedPower { mantissa: 0x8d07e33455637eb2, binary_exponent: 587 }, // 5^280
	CachedPower { mantissa: 0xb049dc016abc5e5f, binary_exponent: 589 }, // 5^281
	CachedPower { mantissa: 0xdc5c5301c56b75f7, binary_exponent: 591 }, // 5^282
	CachedPower { mantissa: 0x89b9b3e11b6329ba, binary_exponent: 594 }, // 5^283
	CachedPower { mantissa: 0xac2820d9623bf429, binary_exponent: 596 }, // 5^284
	CachedPower { mantissa: 0xd732290fbacaf133, binary_exponent: 598 }, // 5^285
	CachedPower { mantissa: 0x867f59a9d4bed6c0, binary_exponent: 601 }, // 5^286
	CachedPower { mantissa: 0xa81f301449ee8c70, binary_exponent: 603 }, // 5^287
	CachedPower { mantissa: 0xd226fc195c6a2f8c, binary_exponent: 605 }, // 5^288
	CachedPower { mantissa: 0x83585d8fd9c25db7, binary_exponent: 608 }, // 5^289
	CachedPower { mantissa: 0xa42e74f3d032f525, binary_exponent: 610 }, // 5^290
	CachedPower { mantissa: 0xcd3a1230c43fb26f, binary_exponent: 612 }, // 5^291
	CachedPower { mantissa: 0x80444b5e7aa7cf85, binary_exponent: 615 }, // 5^292
	CachedPower { mantissa: 0xa0555e361951c366, binary_exponent: 617 }, // 5^293
	CachedPower { mantissa: 0xc86ab5c39fa63440, binary_exponent: 619 }, // 5^294
	CachedPower { mantissa: 0xfa856334878fc150, binary_exponent: 621 }, // 5^295
	CachedPower { mantissa: 0x9c935e00d4b9d8d2, binary_exponent: 624 }, // 5^296
	CachedPower { mantissa: 0xc3b8358109e84f07, binary_exponent: 626 }, // 5^297
	CachedPower { mantissa: 0xf4a642e14c6262c8, binary_exponent: 628 }, // 5^298
	CachedPower { mantissa: 0x98e7e9cccfbd7dbd, binary_exponent: 631 }, // 5^299
	CachedPower { mantissa: 0xbf21e44003acdd2c, binary_exponent: 633 }, // 5^300
	CachedPower { mantissa: 0xeeea5d5004981478, binary_exponent: 635 }, // 5^301
	CachedPower { mantissa: 0x95527a5202df0ccb, binary_exponent: 638 }, // 5^302
	CachedPower { mantissa: 0xbaa718e68396cffd, binary_exponent: 640 }, // 5^303
	CachedPower { mantissa: 0xe950df20247c83fd, binary_exponent: 642 }, // 5^304
	CachedPower { mantissa: 0x91d28b7416cdd27e, binary_exponent: 645 }, // 5^305
	CachedPower { mantissa: 0xb6472e511c81471d, binary_exponent: 647 }, // 5^306
	CachedPower { mantissa: 0xe3d8f9e563a198e5, binary_exponent: 649 }, // 5^307
	CachedPower { mantissa: 0x8e679c2f5e44ff8f, binary_exponent: 652 }, // 5^308
];
